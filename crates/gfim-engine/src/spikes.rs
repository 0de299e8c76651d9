//! Volume spike detection against trailing history.

use std::sync::Arc;

use tracing::{info, warn};

use gfim_analytics::round_dp;
use gfim_core::records::{MarketAlert, SecurityMetric};
use gfim_core::types::{AlertSeverity, AlertType, LiquidityFlag, TradeDate};
use gfim_storage::MarketStore;

use crate::config::EngineConfig;
use crate::error::EngineResult;

/// Flags securities whose volume jumped over their trailing average.
///
/// Each traded metric is compared to the mean volume of its most recent
/// historical metric rows (excluding the run date). Securities without
/// volume today are marked stale and skipped; securities without history
/// get no determination at all. A failed history query for one ISIN is
/// logged and skipped without affecting the others.
pub struct VolumeSpikeDetector {
    store: Arc<dyn MarketStore>,
    config: EngineConfig,
}

impl VolumeSpikeDetector {
    /// Creates a detector over a store.
    pub fn new(store: Arc<dyn MarketStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Sets `liquidity_flag`, `volume_avg_30d` and `volume_spike_flag` on
    /// every metric, returning spike alerts.
    ///
    /// Today's volume at or above the configured multiple of a positive
    /// trailing average raises a VOLUME_SPIKE alert of WARNING severity.
    pub fn detect(
        &self,
        date: TradeDate,
        metrics: &mut [SecurityMetric],
    ) -> EngineResult<Vec<MarketAlert>> {
        info!(%date, "detecting volume spikes");

        let mut alerts = Vec::new();
        for metric in metrics.iter_mut() {
            let today = match metric.volume {
                Some(volume) if volume > 0.0 => volume,
                _ => {
                    metric.liquidity_flag = Some(LiquidityFlag::Stale);
                    continue;
                }
            };
            metric.liquidity_flag = Some(LiquidityFlag::Active);

            let history = match self.store.metric_history(
                &metric.isin,
                date,
                self.config.volume_history_rows,
            ) {
                Ok(history) => history,
                Err(e) => {
                    warn!(isin = %metric.isin, error = %e, "volume history query failed");
                    continue;
                }
            };

            let volumes: Vec<f64> = history.iter().filter_map(|m| m.volume).collect();
            if volumes.is_empty() {
                // First sighting of this security; no determination.
                continue;
            }

            let average = volumes.iter().sum::<f64>() / volumes.len() as f64;
            metric.volume_avg_30d = Some(round_dp(average, 2));

            if average > 0.0 && today >= average * self.config.volume_spike_ratio {
                metric.volume_spike_flag = Some(true);
                alerts.push(MarketAlert::new(
                    date,
                    metric.isin.clone(),
                    AlertType::VolumeSpike,
                    format!(
                        "Volume spike: {} vs avg {} ({:.1}x)",
                        format_thousands(today),
                        format_thousands(average),
                        today / average
                    ),
                    AlertSeverity::Warning,
                ));
            } else {
                metric.volume_spike_flag = Some(false);
            }
        }

        info!(%date, alerts = alerts.len(), "volume spikes detected");
        Ok(alerts)
    }
}

/// Formats a volume as a thousands-separated integer, e.g. `3,000,000`.
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
