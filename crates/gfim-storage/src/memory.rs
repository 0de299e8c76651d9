//! In-memory market store.
//!
//! Provides a simple in-memory implementation of the MarketStore trait.
//! Useful for testing and development. Data is not persisted across restarts.

use std::collections::BTreeMap;
use std::sync::RwLock;

use gfim_core::records::{
    DailySummary, MarketAlert, RawTradeRecord, SecurityMetric, YieldCurvePoint,
};
use gfim_core::types::{SourceTable, TradeDate};

use crate::adapter::MarketStore;
use crate::error::{StorageError, StorageResult};

/// In-memory market store.
///
/// Stores all data in ordered maps behind RwLocks, so iteration order (and
/// therefore engine output) is deterministic. Thread-safe and cheap to
/// construct; the substitution store for tests.
///
/// # Example
///
/// ```rust
/// use gfim_storage::{InMemoryStore, MarketStore};
///
/// let store = InMemoryStore::new();
/// assert!(store.is_healthy());
/// ```
pub struct InMemoryStore {
    raw_rows: RwLock<BTreeMap<String, RawTradeRecord>>,
    metrics: RwLock<BTreeMap<String, SecurityMetric>>,
    curve_points: RwLock<BTreeMap<String, YieldCurvePoint>>,
    summaries: RwLock<BTreeMap<String, DailySummary>>,
    alerts: RwLock<Vec<MarketAlert>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            raw_rows: RwLock::new(BTreeMap::new()),
            metrics: RwLock::new(BTreeMap::new()),
            curve_points: RwLock::new(BTreeMap::new()),
            summaries: RwLock::new(BTreeMap::new()),
            alerts: RwLock::new(Vec::new()),
        }
    }

    fn raw_key(table: SourceTable, date: TradeDate, isin: &str) -> String {
        format!("{}:{}:{}", table.table_name(), date, isin)
    }

    fn raw_prefix(table: SourceTable, date: TradeDate) -> String {
        format!("{}:{}:", table.table_name(), date)
    }

    fn metric_key(isin: &str, date: TradeDate) -> String {
        format!("{}:{}", isin, date)
    }

    fn curve_key(point: &YieldCurvePoint) -> String {
        format!(
            "{}:{}:{}",
            point.date,
            point.curve_type,
            point.maturity_bucket.label()
        )
    }
}

impl MarketStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn is_healthy(&self) -> bool {
        true
    }

    // =========================================================================
    // RAW TRADE TABLES
    // =========================================================================

    fn upsert_raw_records(
        &self,
        table: SourceTable,
        records: &[RawTradeRecord],
    ) -> StorageResult<usize> {
        let mut rows = self
            .raw_rows
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        for record in records {
            rows.insert(
                Self::raw_key(table, record.date, &record.isin),
                record.clone(),
            );
        }
        Ok(records.len())
    }

    fn raw_records(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> StorageResult<Vec<RawTradeRecord>> {
        let rows = self
            .raw_rows
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        let prefix = Self::raw_prefix(table, date);
        Ok(rows
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn maturity_days(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> StorageResult<BTreeMap<String, u32>> {
        Ok(self
            .raw_records(table, date)?
            .into_iter()
            .filter_map(|record| record.days_to_maturity.map(|days| (record.isin, days)))
            .collect())
    }

    // =========================================================================
    // SECURITY METRICS
    // =========================================================================

    fn upsert_metrics(&self, metrics: &[SecurityMetric]) -> StorageResult<usize> {
        let mut map = self
            .metrics
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        for metric in metrics {
            map.insert(Self::metric_key(&metric.isin, metric.date), metric.clone());
        }
        Ok(metrics.len())
    }

    fn metrics_for_date(&self, date: TradeDate) -> StorageResult<Vec<SecurityMetric>> {
        let map = self
            .metrics
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        Ok(map
            .values()
            .filter(|metric| metric.date == date)
            .cloned()
            .collect())
    }

    fn metric_history(
        &self,
        isin: &str,
        exclude: TradeDate,
        limit: usize,
    ) -> StorageResult<Vec<SecurityMetric>> {
        let map = self
            .metrics
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        let prefix = format!("{}:", isin);

        let mut history: Vec<SecurityMetric> = map
            .iter()
            .filter(|(key, metric)| key.starts_with(&prefix) && metric.date != exclude)
            .map(|(_, metric)| metric.clone())
            .collect();

        // Newest first, capped at the query limit.
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history.truncate(limit);
        Ok(history)
    }

    // =========================================================================
    // YIELD CURVE POINTS
    // =========================================================================

    fn upsert_curve_points(&self, points: &[YieldCurvePoint]) -> StorageResult<usize> {
        let mut map = self
            .curve_points
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        for point in points {
            map.insert(Self::curve_key(point), point.clone());
        }
        Ok(points.len())
    }

    fn curve_points_for_date(&self, date: TradeDate) -> StorageResult<Vec<YieldCurvePoint>> {
        let map = self
            .curve_points
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?;
        let mut points: Vec<YieldCurvePoint> = map
            .values()
            .filter(|point| point.date == date)
            .cloned()
            .collect();
        points.sort_by_key(|point| point.maturity_bucket);
        Ok(points)
    }

    // =========================================================================
    // DAILY SUMMARY
    // =========================================================================

    fn upsert_daily_summary(&self, summary: &DailySummary) -> StorageResult<()> {
        self.summaries
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?
            .insert(summary.date.to_string(), summary.clone());
        Ok(())
    }

    fn daily_summary(&self, date: TradeDate) -> StorageResult<Option<DailySummary>> {
        Ok(self
            .summaries
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?
            .get(&date.to_string())
            .cloned())
    }

    // =========================================================================
    // MARKET ALERTS
    // =========================================================================

    fn append_alerts(&self, alerts: &[MarketAlert]) -> StorageResult<usize> {
        self.alerts
            .write()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?
            .extend_from_slice(alerts);
        Ok(alerts.len())
    }

    fn alerts_for_date(&self, date: TradeDate) -> StorageResult<Vec<MarketAlert>> {
        Ok(self
            .alerts
            .read()
            .map_err(|e| StorageError::Database(format!("Lock error: {}", e)))?
            .iter()
            .filter(|alert| alert.date == date)
            .cloned()
            .collect())
    }
}
