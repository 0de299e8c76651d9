//! Ghana market reference constants.
//!
//! These feed the daily summary and the real-yield calculation. The engine
//! configuration can override the macro rates at runtime; these values are
//! the defaults.

/// Ghana headline inflation rate, percent.
pub const GHANA_INFLATION_RATE: f64 = 23.2;

/// Bank of Ghana monetary policy rate, percent.
pub const GHANA_POLICY_RATE: f64 = 29.0;

/// Curve identifier for the Government of Ghana benchmark curve.
pub const GOG_CURVE_TYPE: &str = "GOG";
