//! Corporate spread vs government benchmark.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use gfim_analytics::round_dp;
use gfim_core::records::{MarketAlert, SecurityMetric, YieldCurvePoint};
use gfim_core::types::{AlertSeverity, AlertType, MaturityBucket, SecurityType, SourceTable, TradeDate};
use gfim_storage::MarketStore;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// Decorates corporate metrics with their benchmark yield and spread.
///
/// The benchmark is the freshly built GOG curve yield at the corporate
/// bond's own maturity bucket. Corporate maturities are not part of the
/// curve query, so they are fetched separately by ISIN. Corporates with no
/// benchmark bucket keep both fields unset and raise no alert.
pub struct SpreadCalculator {
    store: Arc<dyn MarketStore>,
    config: EngineConfig,
}

impl SpreadCalculator {
    /// Creates a calculator over a store.
    pub fn new(store: Arc<dyn MarketStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Sets `benchmark_yield` and `spread_vs_govt` on every corporate
    /// metric with a resolvable benchmark, returning spread alerts.
    ///
    /// A spread strictly above the configured threshold raises a
    /// SPREAD_WIDENING alert of INFO severity.
    pub fn apply(
        &self,
        date: TradeDate,
        metrics: &mut [SecurityMetric],
        curve: &[YieldCurvePoint],
    ) -> EngineResult<Vec<MarketAlert>> {
        info!(%date, "calculating corporate spreads");

        let benchmark_by_bucket: BTreeMap<MaturityBucket, f64> = curve
            .iter()
            .map(|point| (point.maturity_bucket, point.yield_pct))
            .collect();

        let days_by_isin = self
            .store
            .maturity_days(SourceTable::Corporate, date)
            .map_err(|e| EngineError::storage("corporate_spreads", e))?;

        let mut alerts = Vec::new();
        for metric in metrics
            .iter_mut()
            .filter(|m| m.security_type == SecurityType::Corporate)
        {
            let Some(ytm) = metric.ytm else { continue };
            let Some(&days) = days_by_isin.get(&metric.isin) else {
                continue;
            };
            let bucket = MaturityBucket::for_days(days);
            let Some(&benchmark) = benchmark_by_bucket.get(&bucket) else {
                continue;
            };

            let spread = round_dp(ytm - benchmark, 4);
            metric.benchmark_yield = Some(round_dp(benchmark, 4));
            metric.spread_vs_govt = Some(spread);

            if spread > self.config.spread_alert_threshold {
                alerts.push(MarketAlert::new(
                    date,
                    metric.isin.clone(),
                    AlertType::SpreadWidening,
                    format!("Corporate spread at {spread:.2}% vs benchmark {benchmark:.2}%"),
                    AlertSeverity::Info,
                ));
            }
        }

        info!(%date, alerts = alerts.len(), "corporate spreads calculated");
        Ok(alerts)
    }
}
