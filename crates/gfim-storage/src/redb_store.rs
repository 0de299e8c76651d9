//! Redb-backed market store.
//!
//! Implements the MarketStore trait using redb as the underlying database.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};

use gfim_core::records::{
    DailySummary, MarketAlert, RawTradeRecord, SecurityMetric, YieldCurvePoint,
};
use gfim_core::types::{SourceTable, TradeDate};

use crate::adapter::MarketStore;
use crate::error::StorageResult;

// Table definitions. One redb table per logical GFIM table; values are
// serde_json blobs keyed by composite strings.
const RAW_NEW_GOG_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("raw_new_gog_notes_and_bonds");
const RAW_OLD_GOG_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("raw_old_gog_notes_and_bonds");
const RAW_TBILLS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("raw_treasury_bills");
const RAW_CORPORATE_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("raw_corporate_bonds");
const METRICS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("security_metrics");
const CURVE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("yield_curve_points");
const SUMMARY_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("daily_market_summary");
const ALERTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("market_alerts");

/// Redb-based market store.
///
/// Uses redb, a pure-Rust embedded database with ACID transactions, for
/// persistent storage. Suitable for single-process batch runs.
///
/// # Key layout
///
/// - Raw tables: `{date}:{isin}` (one redb table per source table)
/// - `security_metrics`: `{isin}:{date}` — a prefix scan per ISIN walks the
///   security's history, and ISO dates keep it in date order
/// - `yield_curve_points`: `{date}:{curve_type}:{bucket}`
/// - `daily_market_summary`: `{date}`
/// - `market_alerts`: `{date}:{millis}:{uuid}` (see [`RedbStore::alert_key`])
///
/// # Example
///
/// ```rust,ignore
/// use gfim_storage::{MarketStore, RedbStore};
///
/// let store = RedbStore::open("./data/gfim.redb")?;
/// assert!(store.is_healthy());
/// ```
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Opens or creates a database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.initialize_tables()?;
        Ok(store)
    }

    /// Initializes all required tables.
    fn initialize_tables(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(RAW_NEW_GOG_TABLE)?;
            let _ = write_txn.open_table(RAW_OLD_GOG_TABLE)?;
            let _ = write_txn.open_table(RAW_TBILLS_TABLE)?;
            let _ = write_txn.open_table(RAW_CORPORATE_TABLE)?;
            let _ = write_txn.open_table(METRICS_TABLE)?;
            let _ = write_txn.open_table(CURVE_TABLE)?;
            let _ = write_txn.open_table(SUMMARY_TABLE)?;
            let _ = write_txn.open_table(ALERTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Maps a source table to its redb table.
    fn raw_table(table: SourceTable) -> TableDefinition<'static, &'static str, &'static [u8]> {
        match table {
            SourceTable::NewGogNotesAndBonds => RAW_NEW_GOG_TABLE,
            SourceTable::OldGogNotesAndBonds => RAW_OLD_GOG_TABLE,
            SourceTable::TreasuryBills => RAW_TBILLS_TABLE,
            SourceTable::Corporate => RAW_CORPORATE_TABLE,
        }
    }

    /// Creates a composite key for raw rows.
    fn raw_key(date: TradeDate, isin: &str) -> String {
        format!("{}:{}", date, isin)
    }

    /// Creates a composite key for metrics.
    fn metric_key(isin: &str, date: TradeDate) -> String {
        format!("{}:{}", isin, date)
    }

    /// Creates a composite key for curve points.
    fn curve_key(point: &YieldCurvePoint) -> String {
        format!(
            "{}:{}:{}",
            point.date,
            point.curve_type,
            point.maturity_bucket.label()
        )
    }

    /// Creates a key for an appended alert.
    ///
    /// The millisecond timestamp keeps alerts in append order within a date;
    /// the uuid makes every append unique, which is what keeps the trail
    /// append-only. A deduplicating policy would swap this for
    /// `{date}:{isin}:{alert_type}`.
    fn alert_key(alert: &MarketAlert) -> String {
        format!(
            "{}:{:013}:{}",
            alert.date,
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4()
        )
    }
}

impl MarketStore for RedbStore {
    fn backend_name(&self) -> &'static str {
        "redb"
    }

    fn is_healthy(&self) -> bool {
        self.db.begin_read().is_ok()
    }

    // =========================================================================
    // RAW TRADE TABLES
    // =========================================================================

    fn upsert_raw_records(
        &self,
        table: SourceTable,
        records: &[RawTradeRecord],
    ) -> StorageResult<usize> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tbl = write_txn.open_table(Self::raw_table(table))?;
            for record in records {
                let key = Self::raw_key(record.date, &record.isin);
                let data = serde_json::to_vec(record)?;
                tbl.insert(key.as_str(), data.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(records.len())
    }

    fn raw_records(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> StorageResult<Vec<RawTradeRecord>> {
        let read_txn = self.db.begin_read()?;
        let tbl = read_txn.open_table(Self::raw_table(table))?;

        let prefix = format!("{}:", date);
        let mut records = Vec::new();
        for entry in tbl.iter()? {
            let (key, value) = entry?;
            if key.value().starts_with(&prefix) {
                let record: RawTradeRecord = serde_json::from_slice(value.value())?;
                records.push(record);
            }
        }
        Ok(records)
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
        let write_txn = self.db.begin_write()?;
        {
            let mut tbl = write_txn.open_table(METRICS_TABLE)?;
            for metric in metrics {
                let key = Self::metric_key(&metric.isin, metric.date);
                let data = serde_json::to_vec(metric)?;
                tbl.insert(key.as_str(), data.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(metrics.len())
    }

    fn metrics_for_date(&self, date: TradeDate) -> StorageResult<Vec<SecurityMetric>> {
        let read_txn = self.db.begin_read()?;
        let tbl = read_txn.open_table(METRICS_TABLE)?;

        // Keys lead with the ISIN, so iteration order is already ISIN order.
        let mut metrics = Vec::new();
        for entry in tbl.iter()? {
            let (_, value) = entry?;
            let metric: SecurityMetric = serde_json::from_slice(value.value())?;
            if metric.date == date {
                metrics.push(metric);
            }
        }
        Ok(metrics)
    }

    fn metric_history(
        &self,
        isin: &str,
        exclude: TradeDate,
        limit: usize,
    ) -> StorageResult<Vec<SecurityMetric>> {
        let read_txn = self.db.begin_read()?;
        let tbl = read_txn.open_table(METRICS_TABLE)?;

        let prefix = format!("{}:", isin);
        let mut history = Vec::new();
        for entry in tbl.iter()? {
            let (key, value) = entry?;
            if key.value().starts_with(&prefix) {
                let metric: SecurityMetric = serde_json::from_slice(value.value())?;
                if metric.date != exclude {
                    history.push(metric);
                }
            }
        }

        // Newest first, capped at the query limit.
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history.truncate(limit);
        Ok(history)
    }

    // =========================================================================
    // YIELD CURVE POINTS
    // =========================================================================

    fn upsert_curve_points(&self, points: &[YieldCurvePoint]) -> StorageResult<usize> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tbl = write_txn.open_table(CURVE_TABLE)?;
            for point in points {
                let key = Self::curve_key(point);
                let data = serde_json::to_vec(point)?;
                tbl.insert(key.as_str(), data.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(points.len())
    }

    fn curve_points_for_date(&self, date: TradeDate) -> StorageResult<Vec<YieldCurvePoint>> {
        let read_txn = self.db.begin_read()?;
        let tbl = read_txn.open_table(CURVE_TABLE)?;

        let prefix = format!("{}:", date);
        let mut points = Vec::new();
        for entry in tbl.iter()? {
            let (key, value) = entry?;
            if key.value().starts_with(&prefix) {
                let point: YieldCurvePoint = serde_json::from_slice(value.value())?;
                points.push(point);
            }
        }
        points.sort_by_key(|point| point.maturity_bucket);
        Ok(points)
    }

    // =========================================================================
    // DAILY SUMMARY
    // =========================================================================

    fn upsert_daily_summary(&self, summary: &DailySummary) -> StorageResult<()> {
        let key = summary.date.to_string();
        let data = serde_json::to_vec(summary)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut tbl = write_txn.open_table(SUMMARY_TABLE)?;
            tbl.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn daily_summary(&self, date: TradeDate) -> StorageResult<Option<DailySummary>> {
        let read_txn = self.db.begin_read()?;
        let tbl = read_txn.open_table(SUMMARY_TABLE)?;
        match tbl.get(date.to_string().as_str())? {
            Some(data) => {
                let summary: DailySummary = serde_json::from_slice(data.value())?;
                Ok(Some(summary))
            }
            None => Ok(None),
        }
    }

    // =========================================================================
    // MARKET ALERTS
    // =========================================================================

    fn append_alerts(&self, alerts: &[MarketAlert]) -> StorageResult<usize> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tbl = write_txn.open_table(ALERTS_TABLE)?;
            for alert in alerts {
                let key = Self::alert_key(alert);
                let data = serde_json::to_vec(alert)?;
                tbl.insert(key.as_str(), data.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(alerts.len())
    }

    fn alerts_for_date(&self, date: TradeDate) -> StorageResult<Vec<MarketAlert>> {
        let read_txn = self.db.begin_read()?;
        let tbl = read_txn.open_table(ALERTS_TABLE)?;

        let prefix = format!("{}:", date);
        let mut alerts = Vec::new();
        for entry in tbl.iter()? {
            let (key, value) = entry?;
            if key.value().starts_with(&prefix) {
                let alert: MarketAlert = serde_json::from_slice(value.value())?;
                alerts.push(alert);
            }
        }
        Ok(alerts)
    }
}
