//! Display-precision rounding convention.

/// Rounds a value to a number of decimal places, half away from zero.
///
/// Derived analytics are persisted at display precision (two places for
/// durations and slopes, four for yields and spreads); this is the one
/// rounding used everywhere.
#[must_use]
pub fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
