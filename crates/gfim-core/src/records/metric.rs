//! Derived per-security analytics record.

use serde::{Deserialize, Serialize};

use crate::types::{LiquidityFlag, LiquidityTier, SecurityType, TradeDate};

/// The derived analytics row for one security on one date.
///
/// Keyed by (date, isin); exactly one row per security per run across all
/// source tables. Analytics that could not be derived stay `None` and
/// serialize as `null`, so the persisted schema is fixed. `turnover_ratio`,
/// `convexity`, `z_spread` and `corporate_spread` are schema placeholders
/// the daily run never fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityMetric {
    /// Trading date of the run.
    pub date: TradeDate,
    /// Security identifier.
    pub isin: String,
    /// Instrument classification.
    pub security_type: SecurityType,
    /// Yield to maturity, percent.
    pub ytm: Option<f64>,
    /// Bank discount yield, percent (T-bills only).
    pub discount_yield: Option<f64>,
    /// Bond equivalent yield, percent (T-bills only).
    pub bond_equivalent_yield: Option<f64>,
    /// Inflation-adjusted yield, percent.
    pub real_yield: Option<f64>,
    /// Coupon rate parsed from the security description, percent.
    pub coupon_rate: Option<f64>,
    /// Face value traded on the date.
    pub volume: Option<f64>,
    /// Volume over outstanding; not derived by the daily run.
    pub turnover_ratio: Option<f64>,
    /// Absolute high-low yield spread of the day.
    pub hl_spread: Option<f64>,
    /// Volume-based liquidity tier.
    pub liquidity_score: LiquidityTier,
    /// Approximate modified duration, years.
    pub modified_duration: Option<f64>,
    /// Convexity; not derived by the daily run.
    pub convexity: Option<f64>,
    /// Z-spread; not derived by the daily run.
    pub z_spread: Option<f64>,
    /// Corporate spread; not derived by the daily run.
    pub corporate_spread: Option<f64>,
    /// Benchmark curve yield at this security's bucket, percent.
    pub benchmark_yield: Option<f64>,
    /// Corporate yield minus benchmark yield, points.
    pub spread_vs_govt: Option<f64>,
    /// Trailing average volume over the history window.
    pub volume_avg_30d: Option<f64>,
    /// Whether today's volume is a spike over the trailing average.
    pub volume_spike_flag: Option<bool>,
    /// Whether the security traded on the run date.
    pub liquidity_flag: Option<LiquidityFlag>,
}

impl SecurityMetric {
    /// Creates a metric with the identifying fields set and every derived
    /// analytic absent.
    #[must_use]
    pub fn new(
        date: TradeDate,
        isin: impl Into<String>,
        security_type: SecurityType,
        liquidity_score: LiquidityTier,
    ) -> Self {
        Self {
            date,
            isin: isin.into(),
            security_type,
            ytm: None,
            discount_yield: None,
            bond_equivalent_yield: None,
            real_yield: None,
            coupon_rate: None,
            volume: None,
            turnover_ratio: None,
            hl_spread: None,
            liquidity_score,
            modified_duration: None,
            convexity: None,
            z_spread: None,
            corporate_spread: None,
            benchmark_yield: None,
            spread_vs_govt: None,
            volume_avg_30d: None,
            volume_spike_flag: None,
            liquidity_flag: None,
        }
    }
}
