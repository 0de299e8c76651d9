//! Daily market summary.

use tracing::info;

use gfim_analytics::round_dp;
use gfim_core::records::{DailySummary, SecurityMetric, YieldCurvePoint};
use gfim_core::types::{CurveShape, MaturityBucket, SecurityType, TradeDate};

use crate::config::EngineConfig;

/// Builds the single summary row for one date.
///
/// Pure over its inputs: curve shape and slope come from the day's curve
/// points, volumes and the most-active security from the day's metrics, and
/// the macro rates from configuration. With fewer than two curve points the
/// slope is zero, which classifies as a flat curve.
pub fn build_daily_summary(
    date: TradeDate,
    metrics: &[SecurityMetric],
    curve: &[YieldCurvePoint],
    config: &EngineConfig,
) -> DailySummary {
    info!(%date, "building daily summary");

    let mut sorted: Vec<&YieldCurvePoint> = curve.iter().collect();
    sorted.sort_by_key(|point| point.maturity_days);

    let curve_slope = if sorted.len() >= 2 {
        let first = sorted.first().map(|p| p.yield_pct).unwrap_or(0.0);
        let last = sorted.last().map(|p| p.yield_pct).unwrap_or(0.0);
        round_dp(last - first, 2)
    } else {
        0.0
    };

    let curve_shape = if curve_slope < -0.5 {
        CurveShape::Inverted
    } else if curve_slope < 0.5 {
        CurveShape::Flat
    } else {
        CurveShape::Normal
    };

    let bucket_yield = |bucket: MaturityBucket| {
        curve
            .iter()
            .find(|point| point.maturity_bucket == bucket)
            .map(|point| point.yield_pct)
    };
    let spread_91d_10y = bucket_yield(MaturityBucket::D91)
        .zip(bucket_yield(MaturityBucket::Y10))
        .map(|(short, long)| round_dp(long - short, 2));

    let volume_total = |security_type: SecurityType| {
        metrics
            .iter()
            .filter(|m| m.security_type == security_type)
            .map(|m| m.volume.unwrap_or(0.0))
            .sum::<f64>()
    };

    // Maximum volume across all metrics; first metric wins ties (and the
    // all-untraded day), matching the fixed table processing order.
    let mut most_active: Option<&SecurityMetric> = None;
    for metric in metrics {
        match most_active {
            Some(best) if metric.volume.unwrap_or(0.0) <= best.volume.unwrap_or(0.0) => {}
            _ => most_active = Some(metric),
        }
    }

    DailySummary {
        date,
        curve_shape,
        curve_slope,
        spread_91d_10y,
        total_volume_gog: volume_total(SecurityType::GogBond),
        total_volume_tbill: volume_total(SecurityType::Tbill),
        total_volume_corporate: volume_total(SecurityType::Corporate),
        most_active_isin: most_active.map(|m| m.isin.clone()),
        inflation_rate: config.inflation_rate,
        policy_rate: config.policy_rate,
    }
}
