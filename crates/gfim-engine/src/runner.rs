//! Run orchestration for one trade date.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use gfim_core::records::{DailySummary, MarketAlert, SecurityMetric, YieldCurvePoint};
use gfim_core::types::{SourceTable, TradeDate};
use gfim_storage::MarketStore;

use crate::config::EngineConfig;
use crate::curve::CurveBuilder;
use crate::error::{EngineError, EngineResult};
use crate::metrics::MetricBuilder;
use crate::spikes::VolumeSpikeDetector;
use crate::spreads::SpreadCalculator;
use crate::summary::build_daily_summary;

/// Counters for one engine run.
///
/// Per-row and per-section failures never abort a run; they land here so
/// the caller can report them. `failed_sections` names the table queries or
/// silver-layer writes that errored.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Trade date the run processed.
    pub date: TradeDate,
    /// Metrics derived across all source tables.
    pub metric_count: usize,
    /// Raw rows skipped because their computation failed.
    pub skipped_rows: usize,
    /// Curve points built.
    pub curve_point_count: usize,
    /// Spread-widening alerts raised.
    pub spread_alert_count: usize,
    /// Volume-spike alerts raised.
    pub volume_alert_count: usize,
    /// Sections whose store call failed.
    pub failed_sections: Vec<String>,
    /// Whether results were written to the store (false on a dry run).
    pub persisted: bool,
}

impl RunReport {
    fn new(date: TradeDate) -> Self {
        Self {
            date,
            metric_count: 0,
            skipped_rows: 0,
            curve_point_count: 0,
            spread_alert_count: 0,
            volume_alert_count: 0,
            failed_sections: Vec::new(),
            persisted: false,
        }
    }
}

/// The daily quant engine.
///
/// Sequences the pipeline for one trade date: per-table metrics, the
/// benchmark curve, corporate spreads, volume spikes, the daily summary,
/// then persistence. Each section that fails is logged and recorded in the
/// [`RunReport`]; later independent sections still run.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use gfim_core::types::TradeDate;
/// use gfim_engine::{EngineConfig, QuantEngine};
/// use gfim_storage::InMemoryStore;
///
/// let engine = QuantEngine::new(Arc::new(InMemoryStore::new()), EngineConfig::default());
/// let report = engine.run(TradeDate::parse("2026-01-30").unwrap()).unwrap();
/// assert_eq!(report.metric_count, 0);
/// ```
pub struct QuantEngine {
    store: Arc<dyn MarketStore>,
    config: EngineConfig,
}

impl QuantEngine {
    /// Creates an engine over a store.
    pub fn new(store: Arc<dyn MarketStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Runs the full pipeline for one date and persists the results.
    ///
    /// Metrics, curve points and the summary are upserted on their natural
    /// keys, so re-running a date converges; alerts are appended and
    /// accumulate across runs.
    pub fn run(&self, date: TradeDate) -> EngineResult<RunReport> {
        self.execute(date, true)
    }

    /// Runs the full pipeline for one date without writing anything.
    pub fn dry_run(&self, date: TradeDate) -> EngineResult<RunReport> {
        self.execute(date, false)
    }

    fn execute(&self, date: TradeDate, persist: bool) -> EngineResult<RunReport> {
        if !self.store.is_healthy() {
            return Err(EngineError::StoreUnavailable {
                backend: self.store.backend_name(),
            });
        }

        info!(%date, backend = self.store.backend_name(), dry_run = !persist, "quant engine run starting");
        let mut report = RunReport::new(date);

        // Per-type metrics, in fixed table order.
        let builder = MetricBuilder::new(Arc::clone(&self.store), self.config.clone());
        let mut metrics: Vec<SecurityMetric> = Vec::new();
        for table in SourceTable::ALL {
            match builder.build_for_table(table, date) {
                Ok(out) => {
                    report.skipped_rows += out.skipped;
                    metrics.extend(out.metrics);
                }
                Err(e) => {
                    error!(table = %table, error = %e, "metric section failed");
                    report.failed_sections.push(table.table_name().to_string());
                }
            }
        }
        report.metric_count = metrics.len();

        // Benchmark curve.
        let curve: Vec<YieldCurvePoint> =
            match CurveBuilder::new(Arc::clone(&self.store)).build(date, &metrics) {
                Ok(points) => points,
                Err(e) => {
                    error!(error = %e, "curve section failed");
                    report.failed_sections.push("yield_curve".to_string());
                    Vec::new()
                }
            };
        report.curve_point_count = curve.len();

        // Corporate spreads.
        let spread_calculator =
            SpreadCalculator::new(Arc::clone(&self.store), self.config.clone());
        let spread_alerts = match spread_calculator.apply(date, &mut metrics, &curve) {
            Ok(alerts) => alerts,
            Err(e) => {
                error!(error = %e, "spread section failed");
                report.failed_sections.push("corporate_spreads".to_string());
                Vec::new()
            }
        };
        report.spread_alert_count = spread_alerts.len();

        // Volume spikes. Per-ISIN history failures are absorbed inside.
        let detector = VolumeSpikeDetector::new(Arc::clone(&self.store), self.config.clone());
        let volume_alerts = detector.detect(date, &mut metrics)?;
        report.volume_alert_count = volume_alerts.len();

        let summary = build_daily_summary(date, &metrics, &curve, &self.config);

        let mut alerts = spread_alerts;
        alerts.extend(volume_alerts);

        if persist {
            self.persist(&metrics, &curve, &summary, &alerts, &mut report);
            report.persisted = true;
        } else {
            info!(%date, "dry run: skipping persistence");
        }

        info!(
            %date,
            metrics = report.metric_count,
            skipped = report.skipped_rows,
            curve_points = report.curve_point_count,
            alerts = alerts.len(),
            failed_sections = report.failed_sections.len(),
            "quant engine run complete"
        );
        Ok(report)
    }

    /// Writes the run's outputs to the silver layer.
    ///
    /// The typed records serialize their full field set (absent analytics
    /// as explicit nulls), so every upserted row has the fixed schema the
    /// store enforces. Empty collections are skipped; a failed write is
    /// recorded and the remaining writes still happen.
    fn persist(
        &self,
        metrics: &[SecurityMetric],
        curve: &[YieldCurvePoint],
        summary: &DailySummary,
        alerts: &[MarketAlert],
        report: &mut RunReport,
    ) {
        if !metrics.is_empty() {
            match self.store.upsert_metrics(metrics) {
                Ok(count) => info!(count, "upserted security metrics"),
                Err(e) => {
                    error!(error = %e, "failed to upsert security metrics");
                    report.failed_sections.push("security_metrics".to_string());
                }
            }
        }

        if !curve.is_empty() {
            match self.store.upsert_curve_points(curve) {
                Ok(count) => info!(count, "upserted curve points"),
                Err(e) => {
                    error!(error = %e, "failed to upsert curve points");
                    report.failed_sections.push("yield_curve_points".to_string());
                }
            }
        }

        match self.store.upsert_daily_summary(summary) {
            Ok(()) => info!("upserted daily summary"),
            Err(e) => {
                error!(error = %e, "failed to upsert daily summary");
                report
                    .failed_sections
                    .push("daily_market_summary".to_string());
            }
        }

        if !alerts.is_empty() {
            match self.store.append_alerts(alerts) {
                Ok(count) => info!(count, "appended market alerts"),
                Err(e) => {
                    error!(error = %e, "failed to append market alerts");
                    report.failed_sections.push("market_alerts".to_string());
                }
            }
        }
    }
}
