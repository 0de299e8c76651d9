//! Yield calculations for discount instruments and coupon bonds.
//!
//! Provides:
//! - T-bill discount yield and bond equivalent yield
//! - Capital-gain YTM approximation for notes and bonds
//! - Coupon extraction from free-text security descriptions
//!
//! All yields are in percent, rounded to four decimal places.

use crate::rounding::round_dp;

/// The yields of a discount instrument, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TbillYields {
    /// Bank discount yield (360-day basis).
    pub discount_yield: f64,
    /// Bond equivalent yield (365-day basis on invested price).
    pub bond_equivalent_yield: f64,
    /// Yield to maturity; for a discount instrument this is the BEY.
    pub ytm: f64,
}

/// Calculate the yields of a treasury bill from its closing price.
///
/// # Formulas
///
/// ```text
/// Discount Yield = (100 - Price) / 100 × (360 / Days) × 100
/// BEY            = (100 - Price) / Price × (365 / Days) × 100
/// ```
///
/// Returns `None` for a non-positive price or zero days to maturity; the
/// caller treats that as "no yield derivable", not as an error.
#[must_use]
pub fn tbill_yields(closing_price: f64, days_to_maturity: u32) -> Option<TbillYields> {
    if closing_price <= 0.0 || days_to_maturity == 0 {
        return None;
    }

    let days = f64::from(days_to_maturity);
    let discount = 100.0 - closing_price;

    let discount_yield = round_dp(discount / 100.0 * (360.0 / days) * 100.0, 4);
    let bey = round_dp(discount / closing_price * (365.0 / days) * 100.0, 4);

    Some(TbillYields {
        discount_yield,
        bond_equivalent_yield: bey,
        ytm: bey,
    })
}

/// Approximate the yield to maturity of a coupon bond.
///
/// Uses the capital-gain approximation rather than cash-flow discounting,
/// matching how the market quotes these thinly traded instruments:
///
/// ```text
/// YTM = (Coupon + (100 - Price) / Years) / ((100 + Price) / 2) × 100
/// ```
///
/// `coupon_rate` is in percent and defaults to zero when absent. Returns
/// `None` for a non-positive price or zero days to maturity.
#[must_use]
pub fn bond_ytm(closing_price: f64, coupon_rate: Option<f64>, days_to_maturity: u32) -> Option<f64> {
    if closing_price <= 0.0 || days_to_maturity == 0 {
        return None;
    }

    let years = f64::from(days_to_maturity) / 365.0;
    let coupon = coupon_rate.unwrap_or(0.0);

    let annual_return = coupon + (100.0 - closing_price) / years;
    let avg_price = (100.0 + closing_price) / 2.0;

    Some(round_dp(annual_return / avg_price * 100.0, 4))
}

/// Extract a coupon rate from a free-text security description.
///
/// GFIM descriptions end in dash-separated fields with the coupon last,
/// e.g. `"GOG-BD-17/08/27-A6139-1838-10.00"`. The description is split on
/// `-` and scanned right to left; the first token that parses as a number
/// strictly between 0 and 100 is taken as the coupon rate in percent.
///
/// This is a heuristic over unstructured text; descriptions without a
/// recognizable coupon yield `None`.
#[must_use]
pub fn extract_coupon(description: &str) -> Option<f64> {
    description
        .split('-')
        .rev()
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .find(|value| *value > 0.0 && *value < 100.0)
}
