//! End-to-end pipeline tests against the in-memory store.

use std::collections::BTreeMap;
use std::sync::Arc;

use approx::assert_relative_eq;

use gfim_core::records::{
    DailySummary, MarketAlert, RawTradeRecord, SecurityMetric, YieldCurvePoint,
};
use gfim_core::types::{
    AlertType, LiquidityFlag, LiquidityTier, MaturityBucket, SecurityType, SourceTable, TradeDate,
};
use gfim_engine::{EngineConfig, QuantEngine};
use gfim_storage::{InMemoryStore, MarketStore, StorageError, StorageResult};

fn date(s: &str) -> TradeDate {
    TradeDate::parse(s).unwrap()
}

fn engine(store: Arc<dyn MarketStore>) -> QuantEngine {
    QuantEngine::new(store, EngineConfig::default())
}

fn tbill_row(date_str: &str, isin: &str) -> RawTradeRecord {
    let mut row = RawTradeRecord::new(date(date_str), isin);
    row.closing_price = Some(96.5);
    row.days_to_maturity = Some(91);
    row.volume_traded = Some(2_000_000.0);
    row.day_high_yield = Some(14.2);
    row.day_low_yield = Some(13.8);
    row
}

#[test]
fn tbill_end_to_end() {
    let store = Arc::new(InMemoryStore::new());
    let run_date = date("2026-01-30");
    store
        .upsert_raw_records(SourceTable::TreasuryBills, &[tbill_row("2026-01-30", "TB1")])
        .unwrap();

    let report = engine(store.clone()).run(run_date).unwrap();
    assert_eq!(report.metric_count, 1);
    assert_eq!(report.skipped_rows, 0);
    assert!(report.failed_sections.is_empty());
    assert!(report.persisted);

    let metrics = store.metrics_for_date(run_date).unwrap();
    assert_eq!(metrics.len(), 1);
    let metric = &metrics[0];
    assert_eq!(metric.security_type, SecurityType::Tbill);
    assert_relative_eq!(metric.discount_yield.unwrap(), 13.8462, epsilon = 1e-9);
    assert_relative_eq!(
        metric.bond_equivalent_yield.unwrap(),
        14.5476,
        epsilon = 1e-9
    );
    assert_eq!(metric.ytm, metric.bond_equivalent_yield);
    assert_eq!(metric.liquidity_score, LiquidityTier::Medium);
    assert_relative_eq!(metric.hl_spread.unwrap(), 0.4, epsilon = 1e-9);
    assert_eq!(metric.liquidity_flag, Some(LiquidityFlag::Active));

    let curve = store.curve_points_for_date(run_date).unwrap();
    assert_eq!(curve.len(), 1);
    assert_eq!(curve[0].maturity_bucket, MaturityBucket::D91);
    assert_eq!(curve[0].maturity_days, 91);
    assert_relative_eq!(curve[0].yield_pct, 14.5476, epsilon = 1e-9);

    let summary = store.daily_summary(run_date).unwrap().unwrap();
    assert_relative_eq!(summary.total_volume_tbill, 2_000_000.0);
    assert_eq!(summary.most_active_isin.as_deref(), Some("TB1"));
}

#[test]
fn corporate_spread_alert_end_to_end() {
    let store = Arc::new(InMemoryStore::new());
    let run_date = date("2026-01-30");

    // A GOG bond with a raw closing yield of 14.5 is the only curve input
    // in the 3Y bucket, so the benchmark there is exactly 14.5.
    let mut gog = RawTradeRecord::new(run_date, "GHGGOG000001");
    gog.closing_yield = Some(14.5);
    gog.days_to_maturity = Some(1000);
    store
        .upsert_raw_records(SourceTable::NewGogNotesAndBonds, &[gog])
        .unwrap();

    // The corporate bond has no price, so its yield falls back to the raw
    // day high of 20.0; same 3Y bucket.
    let mut corp = RawTradeRecord::new(run_date, "GHCORP000001");
    corp.day_high_yield = Some(20.0);
    corp.days_to_maturity = Some(1000);
    store
        .upsert_raw_records(SourceTable::Corporate, &[corp])
        .unwrap();

    let report = engine(store.clone()).run(run_date).unwrap();
    assert_eq!(report.metric_count, 2);
    assert_eq!(report.spread_alert_count, 1);

    let metrics = store.metrics_for_date(run_date).unwrap();
    let corp_metric = metrics
        .iter()
        .find(|m| m.security_type == SecurityType::Corporate)
        .unwrap();
    assert_relative_eq!(corp_metric.benchmark_yield.unwrap(), 14.5, epsilon = 1e-9);
    assert_relative_eq!(corp_metric.spread_vs_govt.unwrap(), 5.5, epsilon = 1e-9);

    let alerts = store.alerts_for_date(run_date).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::SpreadWidening);
    assert_eq!(alerts[0].isin, "GHCORP000001");
    assert_eq!(
        alerts[0].alert_message,
        "Corporate spread at 5.50% vs benchmark 14.50%"
    );
}

#[test]
fn volume_spike_alert_end_to_end() {
    let store = Arc::new(InMemoryStore::new());
    let run_date = date("2026-01-30");

    // Ten days of history averaging exactly one million.
    let history: Vec<SecurityMetric> = (1..=10)
        .map(|day| {
            let mut m = SecurityMetric::new(
                date(&format!("2026-01-{day:02}")),
                "TB1",
                SecurityType::Tbill,
                LiquidityTier::Low,
            );
            m.volume = Some(1_000_000.0);
            m
        })
        .collect();
    store.upsert_metrics(&history).unwrap();

    let mut row = tbill_row("2026-01-30", "TB1");
    row.volume_traded = Some(3_000_000.0);
    store
        .upsert_raw_records(SourceTable::TreasuryBills, &[row])
        .unwrap();

    let report = engine(store.clone()).run(run_date).unwrap();
    assert_eq!(report.volume_alert_count, 1);

    let metric = &store.metrics_for_date(run_date).unwrap()[0];
    assert_eq!(metric.volume_spike_flag, Some(true));
    assert_relative_eq!(metric.volume_avg_30d.unwrap(), 1_000_000.0);

    let alerts = store.alerts_for_date(run_date).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(
        alerts[0].alert_message,
        "Volume spike: 3,000,000 vs avg 1,000,000 (3.0x)"
    );
}

#[test]
fn rerun_converges_except_alerts() {
    let store = Arc::new(InMemoryStore::new());
    let run_date = date("2026-01-30");

    let mut gog = RawTradeRecord::new(run_date, "GHGGOG000001");
    gog.closing_yield = Some(14.5);
    gog.days_to_maturity = Some(1000);
    gog.volume = Some(4_000_000.0);
    store
        .upsert_raw_records(SourceTable::OldGogNotesAndBonds, &[gog])
        .unwrap();

    let mut corp = RawTradeRecord::new(run_date, "GHCORP000001");
    corp.day_high_yield = Some(21.0);
    corp.days_to_maturity = Some(1000);
    store
        .upsert_raw_records(SourceTable::Corporate, &[corp])
        .unwrap();

    let quant = engine(store.clone());
    quant.run(run_date).unwrap();
    let metrics_first = store.metrics_for_date(run_date).unwrap();
    let curve_first = store.curve_points_for_date(run_date).unwrap();
    let summary_first = store.daily_summary(run_date).unwrap().unwrap();
    let alerts_first = store.alerts_for_date(run_date).unwrap();

    quant.run(run_date).unwrap();
    assert_eq!(store.metrics_for_date(run_date).unwrap(), metrics_first);
    assert_eq!(store.curve_points_for_date(run_date).unwrap(), curve_first);
    assert_eq!(store.daily_summary(run_date).unwrap().unwrap(), summary_first);
    // Alerts are append-only; re-running duplicates them.
    assert_eq!(
        store.alerts_for_date(run_date).unwrap().len(),
        alerts_first.len() * 2
    );
    assert_eq!(alerts_first.len(), 1);
}

#[test]
fn dry_run_persists_nothing() {
    let store = Arc::new(InMemoryStore::new());
    let run_date = date("2026-01-30");
    store
        .upsert_raw_records(SourceTable::TreasuryBills, &[tbill_row("2026-01-30", "TB1")])
        .unwrap();

    let report = engine(store.clone()).dry_run(run_date).unwrap();
    assert_eq!(report.metric_count, 1);
    assert!(!report.persisted);

    assert!(store.metrics_for_date(run_date).unwrap().is_empty());
    assert!(store.curve_points_for_date(run_date).unwrap().is_empty());
    assert_eq!(store.daily_summary(run_date).unwrap(), None);
    assert!(store.alerts_for_date(run_date).unwrap().is_empty());
}

/// Delegating store that fails every read of one source table.
struct FailingTableStore {
    inner: InMemoryStore,
    failing: SourceTable,
}

impl MarketStore for FailingTableStore {
    fn backend_name(&self) -> &'static str {
        "failing-table"
    }

    fn is_healthy(&self) -> bool {
        true
    }

    fn upsert_raw_records(
        &self,
        table: SourceTable,
        records: &[RawTradeRecord],
    ) -> StorageResult<usize> {
        self.inner.upsert_raw_records(table, records)
    }

    fn raw_records(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> StorageResult<Vec<RawTradeRecord>> {
        if table == self.failing {
            return Err(StorageError::Database("simulated outage".to_string()));
        }
        self.inner.raw_records(table, date)
    }

    fn maturity_days(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> StorageResult<BTreeMap<String, u32>> {
        if table == self.failing {
            return Err(StorageError::Database("simulated outage".to_string()));
        }
        self.inner.maturity_days(table, date)
    }

    fn upsert_metrics(&self, metrics: &[SecurityMetric]) -> StorageResult<usize> {
        self.inner.upsert_metrics(metrics)
    }

    fn metrics_for_date(&self, date: TradeDate) -> StorageResult<Vec<SecurityMetric>> {
        self.inner.metrics_for_date(date)
    }

    fn metric_history(
        &self,
        isin: &str,
        exclude: TradeDate,
        limit: usize,
    ) -> StorageResult<Vec<SecurityMetric>> {
        self.inner.metric_history(isin, exclude, limit)
    }

    fn upsert_curve_points(&self, points: &[YieldCurvePoint]) -> StorageResult<usize> {
        self.inner.upsert_curve_points(points)
    }

    fn curve_points_for_date(&self, date: TradeDate) -> StorageResult<Vec<YieldCurvePoint>> {
        self.inner.curve_points_for_date(date)
    }

    fn upsert_daily_summary(&self, summary: &DailySummary) -> StorageResult<()> {
        self.inner.upsert_daily_summary(summary)
    }

    fn daily_summary(&self, date: TradeDate) -> StorageResult<Option<DailySummary>> {
        self.inner.daily_summary(date)
    }

    fn append_alerts(&self, alerts: &[MarketAlert]) -> StorageResult<usize> {
        self.inner.append_alerts(alerts)
    }

    fn alerts_for_date(&self, date: TradeDate) -> StorageResult<Vec<MarketAlert>> {
        self.inner.alerts_for_date(date)
    }
}

#[test]
fn failed_section_does_not_stop_later_sections() {
    let store = Arc::new(FailingTableStore {
        inner: InMemoryStore::new(),
        failing: SourceTable::TreasuryBills,
    });
    let run_date = date("2026-01-30");

    let mut gog = RawTradeRecord::new(run_date, "GHGGOG000001");
    gog.closing_yield = Some(24.0);
    gog.days_to_maturity = Some(300);
    gog.volume = Some(5_000_000.0);
    store
        .upsert_raw_records(SourceTable::NewGogNotesAndBonds, &[gog])
        .unwrap();

    let report = engine(store.clone()).run(run_date).unwrap();

    // The bills section failed twice: its metric query and its leg of the
    // curve's maturity lookup.
    assert_eq!(
        report.failed_sections,
        vec!["treasury_bills".to_string(), "yield_curve".to_string()]
    );
    // The GOG section still produced and persisted its output.
    assert_eq!(report.metric_count, 1);
    let metrics = store.metrics_for_date(run_date).unwrap();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].isin, "GHGGOG000001");
    let summary = store.daily_summary(run_date).unwrap().unwrap();
    assert_relative_eq!(summary.total_volume_gog, 5_000_000.0);
}
