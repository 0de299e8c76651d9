//! Market store trait definition.
//!
//! This module defines the core `MarketStore` trait that all storage
//! backends implement. The engine receives the store as an explicit
//! `Arc<dyn MarketStore>` dependency; nothing reaches for a process-global
//! client.

use std::collections::BTreeMap;

use gfim_core::records::{
    DailySummary, MarketAlert, RawTradeRecord, SecurityMetric, YieldCurvePoint,
};
use gfim_core::types::{SourceTable, TradeDate};

use crate::error::StorageResult;

/// Core market store trait.
///
/// All storage backends (redb, in-memory) implement this trait. Methods are
/// synchronous; the engine is a single-process batch and the embedded
/// database has no async surface.
///
/// Write semantics: `upsert_*` replaces on the record's natural key
/// ((date, isin) for metrics, (date, bucket, curve type) for curve points,
/// date for the summary), so re-running a date converges. `append_alerts`
/// only ever adds rows.
///
/// # Example
///
/// ```rust
/// use gfim_core::records::RawTradeRecord;
/// use gfim_core::types::{SourceTable, TradeDate};
/// use gfim_storage::{InMemoryStore, MarketStore};
///
/// let store = InMemoryStore::new();
/// let date = TradeDate::parse("2025-03-14").unwrap();
/// let row = RawTradeRecord::new(date, "GHGGOG000001");
///
/// store.upsert_raw_records(SourceTable::TreasuryBills, &[row]).unwrap();
/// let rows = store.raw_records(SourceTable::TreasuryBills, date).unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
pub trait MarketStore: Send + Sync {
    /// Returns the backend name for logging.
    fn backend_name(&self) -> &'static str;

    /// Checks if the storage is healthy and accessible.
    fn is_healthy(&self) -> bool;

    // =========================================================================
    // RAW TRADE TABLES
    // =========================================================================

    /// Upserts raw rows into a source table, keyed on (date, isin).
    ///
    /// Returns the number of rows written.
    fn upsert_raw_records(
        &self,
        table: SourceTable,
        records: &[RawTradeRecord],
    ) -> StorageResult<usize>;

    /// Retrieves all raw rows of a source table for one date, ordered by ISIN.
    fn raw_records(&self, table: SourceTable, date: TradeDate)
        -> StorageResult<Vec<RawTradeRecord>>;

    /// Projects (isin -> days to maturity) from a source table for one date.
    ///
    /// Rows without a days-to-maturity value are left out.
    fn maturity_days(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> StorageResult<BTreeMap<String, u32>>;

    // =========================================================================
    // SECURITY METRICS
    // =========================================================================

    /// Upserts derived metrics, keyed on (date, isin).
    ///
    /// Returns the number of rows written.
    fn upsert_metrics(&self, metrics: &[SecurityMetric]) -> StorageResult<usize>;

    /// Retrieves all metrics for one date, ordered by ISIN.
    fn metrics_for_date(&self, date: TradeDate) -> StorageResult<Vec<SecurityMetric>>;

    /// Retrieves a security's metric rows for other dates, newest first.
    ///
    /// Rows whose date equals `exclude` are skipped; at most `limit` rows
    /// are returned.
    fn metric_history(
        &self,
        isin: &str,
        exclude: TradeDate,
        limit: usize,
    ) -> StorageResult<Vec<SecurityMetric>>;

    // =========================================================================
    // YIELD CURVE POINTS
    // =========================================================================

    /// Upserts curve points, keyed on (date, maturity bucket, curve type).
    ///
    /// Returns the number of rows written.
    fn upsert_curve_points(&self, points: &[YieldCurvePoint]) -> StorageResult<usize>;

    /// Retrieves the curve points for one date, in tenor order.
    fn curve_points_for_date(&self, date: TradeDate) -> StorageResult<Vec<YieldCurvePoint>>;

    // =========================================================================
    // DAILY SUMMARY
    // =========================================================================

    /// Upserts the single summary row for the summary's date.
    fn upsert_daily_summary(&self, summary: &DailySummary) -> StorageResult<()>;

    /// Retrieves the summary row for one date.
    fn daily_summary(&self, date: TradeDate) -> StorageResult<Option<DailySummary>>;

    // =========================================================================
    // MARKET ALERTS
    // =========================================================================

    /// Appends alerts; existing rows are never replaced.
    ///
    /// Returns the number of rows appended.
    fn append_alerts(&self, alerts: &[MarketAlert]) -> StorageResult<usize>;

    /// Retrieves all alerts recorded for one date, in append order.
    fn alerts_for_date(&self, date: TradeDate) -> StorageResult<Vec<MarketAlert>>;
}
