//! Domain types for the daily analytics pipeline.
//!
//! This module provides type-safe representations of market concepts:
//!
//! - [`TradeDate`]: Trading date for daily batch runs
//! - [`SecurityType`]: Instrument classification (GOG bond, T-bill, corporate)
//! - [`SourceTable`]: The raw trade tables a run reads, in processing order
//! - [`MaturityBucket`]: Standard curve tenor buckets
//! - [`LiquidityTier`] / [`LiquidityFlag`]: Volume-based liquidity classification
//! - [`AlertType`] / [`AlertSeverity`]: Market alert classification
//! - [`CurveShape`]: Daily yield curve shape

mod bucket;
mod date;
mod market;
mod security;

pub use bucket::MaturityBucket;
pub use date::TradeDate;
pub use market::{AlertSeverity, AlertType, CurveShape, LiquidityFlag, LiquidityTier};
pub use security::{SecurityType, SourceTable};
