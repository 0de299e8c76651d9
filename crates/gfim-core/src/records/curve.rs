//! Bucketed yield curve point.

use serde::{Deserialize, Serialize};

use crate::types::{MaturityBucket, TradeDate};

/// One bucketed point of the daily benchmark curve.
///
/// Keyed by (date, maturity_bucket, curve_type). `maturity_days` is the
/// truncated mean of the contributing securities' days to maturity and
/// `yield` the mean of their yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldCurvePoint {
    /// Trading date of the curve.
    pub date: TradeDate,
    /// Tenor bucket.
    pub maturity_bucket: MaturityBucket,
    /// Curve family identifier (the daily run builds "GOG" only).
    pub curve_type: String,
    /// Truncated mean days to maturity of the bucket's securities.
    pub maturity_days: u32,
    /// Mean yield of the bucket's securities, percent.
    #[serde(rename = "yield")]
    pub yield_pct: f64,
}

impl YieldCurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(
        date: TradeDate,
        maturity_bucket: MaturityBucket,
        curve_type: impl Into<String>,
        maturity_days: u32,
        yield_pct: f64,
    ) -> Self {
        Self {
            date,
            maturity_bucket,
            curve_type: curve_type.into(),
            maturity_days,
            yield_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GOG_CURVE_TYPE;

    #[test]
    fn test_yield_field_name() {
        let point = YieldCurvePoint::new(
            TradeDate::from_ymd(2025, 3, 14).unwrap(),
            MaturityBucket::D91,
            GOG_CURVE_TYPE,
            88,
            24.1234,
        );
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["yield"], 24.1234);
        assert_eq!(json["maturity_bucket"], "91D");
        assert_eq!(json["curve_type"], "GOG");

        let parsed: YieldCurvePoint = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, point);
    }
}
