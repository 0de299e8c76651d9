//! Approximate modified duration.
//!
//! Derived from the closed-form Macaulay duration of an annual-pay bond:
//!
//! ```text
//! D_mac = (1 + y) / y  -  (1 + y + n(c - y)) / (c((1 + y)^n - 1) + y)
//! D_mod = D_mac / (1 + y)
//! ```
//!
//! with y the yield, c the coupon rate (both as decimals) and n the years
//! to maturity. The GFIM feed has no cash flow schedules, so this closed
//! form plus two guard rails stands in for a full discounting calculation.

use crate::rounding::round_dp;

/// Calculate approximate modified duration in years, rounded to two places.
///
/// # Arguments
///
/// * `ytm_pct` - Yield to maturity, percent
/// * `years_to_maturity` - Years to maturity
/// * `coupon_rate_pct` - Coupon rate, percent; zero or absent means a
///   discount instrument, whose duration equals its maturity
///
/// Returns `None` unless both the yield and the years are positive.
///
/// The closed form degrades at the edges of the feed's data quality, so two
/// fixed substitutions apply: a Macaulay value outside `[0, n]` becomes
/// `0.8 × n` before the modified conversion, and a non-finite intermediate
/// result becomes a modified duration of `0.7 × n` outright. Downstream
/// history depends on these exact constants.
#[must_use]
pub fn modified_duration(
    ytm_pct: f64,
    years_to_maturity: f64,
    coupon_rate_pct: Option<f64>,
) -> Option<f64> {
    if ytm_pct <= 0.0 || years_to_maturity <= 0.0 {
        return None;
    }

    let coupon = coupon_rate_pct.unwrap_or(0.0);
    if coupon == 0.0 {
        // Zero-coupon: Macaulay duration is the maturity itself.
        return Some(round_dp(years_to_maturity, 2));
    }

    let y = ytm_pct / 100.0;
    let c = coupon / 100.0;
    let n = years_to_maturity;

    let growth = (1.0 + y).powf(n);
    let macaulay = (1.0 + y) / y - (1.0 + y + n * (c - y)) / (c * (growth - 1.0) + y);

    if !macaulay.is_finite() {
        return Some(round_dp(0.7 * n, 2));
    }

    let macaulay = if macaulay < 0.0 || macaulay > n {
        0.8 * n
    } else {
        macaulay
    };

    Some(round_dp(macaulay / (1.0 + y), 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_coupon_duration_is_maturity() {
        assert_relative_eq!(
            modified_duration(20.0, 3.0, None).unwrap(),
            3.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            modified_duration(20.0, 0.2493, Some(0.0)).unwrap(),
            0.25,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_coupon_bond_duration() {
        // 2y bond, 10% coupon, 20% yield:
        // D_mac = 1.2/0.2 - (1.2 + 2(-0.1)) / (0.1(1.44 - 1) + 0.2) = 1.9016...
        // D_mod = 1.9016... / 1.2 = 1.5847 -> 1.58
        let dur = modified_duration(20.0, 2.0, Some(10.0)).unwrap();
        assert_relative_eq!(dur, 1.58, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range_macaulay_is_clamped() {
        // Short maturity with coupon far above yield pushes the closed form
        // past n, which triggers the 0.8n substitution:
        // 0.8 × 0.25 / 1.05 = 0.1905 -> 0.19
        let dur = modified_duration(5.0, 0.25, Some(30.0)).unwrap();
        assert_relative_eq!(dur, 0.19, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_formula_falls_back() {
        // c((1+y)^n - 1) + y == 0 makes the closed form 0/0; the result is
        // substituted with 0.7n directly.
        let dur = modified_duration(100.0, 1.0, Some(-100.0)).unwrap();
        assert_relative_eq!(dur, 0.7, epsilon = 1e-9);
    }

    #[test]
    fn test_guards() {
        assert_eq!(modified_duration(0.0, 5.0, Some(10.0)), None);
        assert_eq!(modified_duration(-3.0, 5.0, Some(10.0)), None);
        assert_eq!(modified_duration(10.0, 0.0, Some(10.0)), None);
        assert_eq!(modified_duration(10.0, -1.0, Some(10.0)), None);
    }

    proptest! {
        #[test]
        fn duration_stays_within_maturity(
            ytm in 0.1f64..80.0,
            years in 0.02f64..30.0,
            coupon in proptest::option::of(0.1f64..60.0),
        ) {
            let dur = modified_duration(ytm, years, coupon).unwrap();
            // Modified duration never exceeds maturity (allowing for the
            // two-place rounding) and never goes negative.
            prop_assert!(dur >= 0.0);
            prop_assert!(dur <= years + 0.005);
        }
    }
}
