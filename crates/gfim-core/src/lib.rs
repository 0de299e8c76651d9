//! # GFIM Core
//!
//! Core domain types for the GFIM daily fixed income analytics engine.
//!
//! This crate provides the building blocks shared by every other crate:
//!
//! - **Types**: `TradeDate`, `SecurityType`, `SourceTable`, `MaturityBucket`,
//!   liquidity and alert classifications
//! - **Records**: the typed rows that flow through the pipeline, from raw
//!   trade records to derived metrics, curve points, alerts and the daily
//!   market summary
//! - **Constants**: Ghana market reference rates and curve identifiers
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: enums and newtypes instead of stringly-typed values
//! - **Explicit Absence**: analytics that cannot be derived are `None`, never
//!   a sentinel number
//! - **Stable Schema**: every record serializes its full field set so
//!   downstream consumers see a fixed shape
//!
//! ## Example
//!
//! ```rust
//! use gfim_core::prelude::*;
//!
//! let date = TradeDate::parse("2025-03-14").unwrap();
//! assert_eq!(date.to_string(), "2025-03-14");
//! assert_eq!(MaturityBucket::for_days(91).label(), "91D");
//! assert_eq!(MaturityBucket::for_days(92).label(), "182D");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]

pub mod constants;
pub mod error;
pub mod records;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::constants::{GHANA_INFLATION_RATE, GHANA_POLICY_RATE, GOG_CURVE_TYPE};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::records::{
        DailySummary, MarketAlert, RawTradeRecord, SecurityMetric, YieldCurvePoint,
    };
    pub use crate::types::{
        AlertSeverity, AlertType, CurveShape, LiquidityFlag, LiquidityTier, MaturityBucket,
        SecurityType, SourceTable, TradeDate,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use records::{DailySummary, MarketAlert, RawTradeRecord, SecurityMetric, YieldCurvePoint};
pub use types::{
    AlertSeverity, AlertType, CurveShape, LiquidityFlag, LiquidityTier, MaturityBucket,
    SecurityType, SourceTable, TradeDate,
};
