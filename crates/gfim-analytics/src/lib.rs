//! # GFIM Analytics
//!
//! Per-security calculators for the GFIM daily analytics engine.
//!
//! This crate holds the pure calculation logic:
//! - **Yields**: T-bill discount yield and bond equivalent yield, the
//!   capital-gain YTM approximation, coupon extraction from descriptions
//! - **Risk**: approximate modified duration from the closed-form Macaulay
//!   duration of an annual-pay bond
//! - **Liquidity**: volume-based liquidity tiers
//! - **Rounding**: the display-precision rounding convention shared by the
//!   pipeline
//!
//! Every calculator is a total function over its inputs: inputs that make a
//! measure underivable produce `None`, never an error. The market data these
//! functions see is too patchy to treat a missing quote as exceptional.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod duration;
pub mod liquidity;
pub mod rounding;
pub mod yields;

pub use duration::modified_duration;
pub use liquidity::liquidity_tier;
pub use rounding::round_dp;
pub use yields::{bond_ytm, extract_coupon, tbill_yields, TbillYields};
