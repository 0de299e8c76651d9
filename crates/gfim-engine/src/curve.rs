//! Benchmark yield curve construction.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use gfim_analytics::round_dp;
use gfim_core::constants::GOG_CURVE_TYPE;
use gfim_core::records::{SecurityMetric, YieldCurvePoint};
use gfim_core::types::{MaturityBucket, SourceTable, TradeDate};
use gfim_storage::MarketStore;

use crate::error::{EngineError, EngineResult};

/// Builds the daily GOG benchmark curve from government-security metrics.
///
/// Metrics do not retain raw maturities, so the builder re-queries the
/// (ISIN -> days to maturity) projection from the three government tables,
/// buckets every government metric with a known yield, and averages each
/// populated bucket. Buckets nothing matured into are simply absent.
pub struct CurveBuilder {
    store: Arc<dyn MarketStore>,
}

impl CurveBuilder {
    /// Creates a builder over a store.
    pub fn new(store: Arc<dyn MarketStore>) -> Self {
        Self { store }
    }

    /// Builds the curve points for one date.
    ///
    /// Output is in tenor order; `maturity_days` is the truncated mean of
    /// the bucket's contributing maturities and `yield` the mean of its
    /// yields at four places.
    pub fn build(
        &self,
        date: TradeDate,
        metrics: &[SecurityMetric],
    ) -> EngineResult<Vec<YieldCurvePoint>> {
        info!(%date, "building yield curve");

        let mut isin_to_days: BTreeMap<String, u32> = BTreeMap::new();
        for table in SourceTable::GOVERNMENT {
            let days = self
                .store
                .maturity_days(table, date)
                .map_err(|e| EngineError::storage(table.table_name(), e))?;
            isin_to_days.extend(days);
        }

        let mut buckets: BTreeMap<MaturityBucket, Vec<(u32, f64)>> = BTreeMap::new();
        for metric in metrics {
            if !metric.security_type.is_government() {
                continue;
            }
            let Some(ytm) = metric.ytm else { continue };
            let Some(&days) = isin_to_days.get(&metric.isin) else {
                continue;
            };
            buckets
                .entry(MaturityBucket::for_days(days))
                .or_default()
                .push((days, ytm));
        }

        let points: Vec<YieldCurvePoint> = buckets
            .into_iter()
            .map(|(bucket, entries)| {
                let count = entries.len() as f64;
                let avg_days = entries.iter().map(|(d, _)| f64::from(*d)).sum::<f64>() / count;
                let avg_yield = entries.iter().map(|(_, y)| y).sum::<f64>() / count;
                YieldCurvePoint::new(
                    date,
                    bucket,
                    GOG_CURVE_TYPE,
                    avg_days as u32,
                    round_dp(avg_yield, 4),
                )
            })
            .collect();

        info!(%date, points = points.len(), "yield curve built");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gfim_core::records::RawTradeRecord;
    use gfim_core::types::{LiquidityTier, SecurityType};
    use gfim_storage::InMemoryStore;

    fn date() -> TradeDate {
        TradeDate::parse("2026-01-30").unwrap()
    }

    fn seed_days(store: &InMemoryStore, table: SourceTable, isin: &str, days: u32) {
        let mut row = RawTradeRecord::new(date(), isin);
        row.days_to_maturity = Some(days);
        store.upsert_raw_records(table, &[row]).unwrap();
    }

    fn metric(isin: &str, security_type: SecurityType, ytm: Option<f64>) -> SecurityMetric {
        let mut metric = SecurityMetric::new(date(), isin, security_type, LiquidityTier::Low);
        metric.ytm = ytm;
        metric
    }

    #[test]
    fn test_buckets_and_averages() {
        let store = Arc::new(InMemoryStore::new());
        seed_days(&store, SourceTable::TreasuryBills, "TB1", 85);
        seed_days(&store, SourceTable::TreasuryBills, "TB2", 91);
        seed_days(&store, SourceTable::NewGogNotesAndBonds, "BOND10Y", 3600);

        let metrics = vec![
            metric("TB1", SecurityType::Tbill, Some(24.0)),
            metric("TB2", SecurityType::Tbill, Some(25.0)),
            metric("BOND10Y", SecurityType::GogBond, Some(28.1234)),
        ];

        let points = CurveBuilder::new(store).build(date(), &metrics).unwrap();
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].maturity_bucket, MaturityBucket::D91);
        assert_eq!(points[0].maturity_days, 88);
        assert_relative_eq!(points[0].yield_pct, 24.5, epsilon = 1e-9);
        assert_eq!(points[0].curve_type, "GOG");

        assert_eq!(points[1].maturity_bucket, MaturityBucket::Y10);
        assert_eq!(points[1].maturity_days, 3600);
        assert_relative_eq!(points[1].yield_pct, 28.1234, epsilon = 1e-9);
    }

    #[test]
    fn test_corporate_and_unknown_yields_excluded() {
        let store = Arc::new(InMemoryStore::new());
        seed_days(&store, SourceTable::TreasuryBills, "TB1", 91);
        seed_days(&store, SourceTable::Corporate, "CORP1", 91);

        let metrics = vec![
            metric("TB1", SecurityType::Tbill, None),
            metric("CORP1", SecurityType::Corporate, Some(20.0)),
        ];

        let points = CurveBuilder::new(store).build(date(), &metrics).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_metric_without_maturity_lookup_excluded() {
        // The metric exists but no raw government row carries its maturity.
        let store = Arc::new(InMemoryStore::new());
        let metrics = vec![metric("TB1", SecurityType::Tbill, Some(24.0))];
        let points = CurveBuilder::new(store).build(date(), &metrics).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_truncated_mean_days() {
        let store = Arc::new(InMemoryStore::new());
        seed_days(&store, SourceTable::TreasuryBills, "TB1", 90);
        seed_days(&store, SourceTable::TreasuryBills, "TB2", 91);

        let metrics = vec![
            metric("TB1", SecurityType::Tbill, Some(24.0)),
            metric("TB2", SecurityType::Tbill, Some(24.0)),
        ];

        let points = CurveBuilder::new(store).build(date(), &metrics).unwrap();
        // (90 + 91) / 2 = 90.5, truncated
        assert_eq!(points[0].maturity_days, 90);
    }
}
