//! Typed records flowing through the daily pipeline.
//!
//! - [`RawTradeRecord`]: one raw trade row as loaded into a source table
//! - [`SecurityMetric`]: the derived per-security analytics row
//! - [`YieldCurvePoint`]: one bucketed point of the benchmark curve
//! - [`MarketAlert`]: an append-only alert row
//! - [`DailySummary`]: the single per-date market summary row
//!
//! Derived records serialize their full field set (absent analytics as
//! `null`), so a persisted row always has the same shape.

mod alert;
mod curve;
mod metric;
mod raw;
mod summary;

pub use alert::MarketAlert;
pub use curve::YieldCurvePoint;
pub use metric::SecurityMetric;
pub use raw::RawTradeRecord;
pub use summary::DailySummary;
