//! # GFIM Engine
//!
//! The daily quant engine for the Ghana Fixed Income Market: derives
//! per-security metrics, the GOG benchmark curve, market alerts and the
//! daily summary from one date's raw trade rows.
//!
//! This crate provides:
//! - [`MetricBuilder`]: per-table metric derivation with fallible rows
//! - [`CurveBuilder`]: bucketed benchmark curve construction
//! - [`SpreadCalculator`]: corporate spreads vs the benchmark curve
//! - [`VolumeSpikeDetector`]: trailing-average volume anomaly detection
//! - [`build_daily_summary`]: the per-date market summary
//! - [`QuantEngine`]: the run orchestrator tying the pipeline together
//!
//! ## Pipeline
//!
//! ```text
//! Raw trade rows ──> MetricBuilder ──> SecurityMetric
//!                                        │
//!                                        ├─> CurveBuilder ──> YieldCurvePoint
//!                                        │        │
//!                                        ├─< SpreadCalculator ──> MarketAlert
//!                                        ├─< VolumeSpikeDetector ─> MarketAlert
//!                                        │
//!                                        └─> build_daily_summary ─> DailySummary
//! ```
//!
//! Data flows one way; the [`QuantEngine`] is the only component that
//! writes. Every component receives its store as an explicit
//! `Arc<dyn MarketStore>`, so tests substitute the in-memory backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod curve;
pub mod error;
pub mod metrics;
pub mod runner;
pub mod spikes;
pub mod spreads;
pub mod summary;

// Re-exports
pub use config::EngineConfig;
pub use curve::CurveBuilder;
pub use error::{EngineError, EngineResult};
pub use metrics::{build_metric, MetricBuilder, TableMetrics};
pub use runner::{QuantEngine, RunReport};
pub use spikes::VolumeSpikeDetector;
pub use spreads::SpreadCalculator;
pub use summary::build_daily_summary;
