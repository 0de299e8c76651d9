//! Daily market summary record.

use serde::{Deserialize, Serialize};

use crate::types::{CurveShape, TradeDate};

/// The single per-date market summary row.
///
/// Keyed by date and replaced wholesale on re-runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Trading date.
    pub date: TradeDate,
    /// Shape of the day's benchmark curve.
    pub curve_shape: CurveShape,
    /// Last curve yield minus first, points.
    pub curve_slope: f64,
    /// 10Y yield minus 91D yield when both buckets exist, points.
    pub spread_91d_10y: Option<f64>,
    /// Total GOG note/bond volume.
    pub total_volume_gog: f64,
    /// Total treasury bill volume.
    pub total_volume_tbill: f64,
    /// Total corporate bond volume.
    pub total_volume_corporate: f64,
    /// ISIN with the largest volume, if anything traded.
    pub most_active_isin: Option<String>,
    /// Ghana headline inflation rate carried on the summary, percent.
    pub inflation_rate: f64,
    /// Bank of Ghana policy rate carried on the summary, percent.
    pub policy_rate: f64,
}
