//! Per-type security metric builders.
//!
//! One builder handles all four source tables; the table decides which
//! calculator chain and which volume column apply. Each row is a fallible
//! computation: a bad row is logged and counted, never aborts its batch.

use std::sync::Arc;

use tracing::{info, warn};

use gfim_analytics::{
    bond_ytm, extract_coupon, liquidity_tier, modified_duration, round_dp, tbill_yields,
};
use gfim_core::error::CoreResult;
use gfim_core::records::{RawTradeRecord, SecurityMetric};
use gfim_core::types::{SecurityType, SourceTable, TradeDate};
use gfim_storage::MarketStore;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};

/// The metrics derived from one source table, plus the rows that failed.
#[derive(Debug, Default)]
pub struct TableMetrics {
    /// Successfully derived metrics, in store order (by ISIN).
    pub metrics: Vec<SecurityMetric>,
    /// Rows skipped because their computation failed.
    pub skipped: usize,
}

/// Builds per-security metrics from raw trade rows.
pub struct MetricBuilder {
    store: Arc<dyn MarketStore>,
    config: EngineConfig,
}

impl MetricBuilder {
    /// Creates a builder over a store.
    pub fn new(store: Arc<dyn MarketStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Derives metrics for every raw row of one table on one date.
    ///
    /// An empty table produces zero metrics. A row whose computation fails
    /// is skipped with a warning; only the table query itself can fail.
    pub fn build_for_table(
        &self,
        table: SourceTable,
        date: TradeDate,
    ) -> EngineResult<TableMetrics> {
        info!(table = %table, %date, "building security metrics");

        let rows = self
            .store
            .raw_records(table, date)
            .map_err(|e| EngineError::storage(table.table_name(), e))?;

        if rows.is_empty() {
            info!(table = %table, %date, "no raw rows for date");
            return Ok(TableMetrics::default());
        }

        let mut result = TableMetrics::default();
        for row in &rows {
            match build_metric(row, table, &self.config) {
                Ok(metric) => result.metrics.push(metric),
                Err(e) => {
                    warn!(table = %table, isin = %row.isin, error = %e, "skipping row");
                    result.skipped += 1;
                }
            }
        }

        info!(
            table = %table,
            metrics = result.metrics.len(),
            skipped = result.skipped,
            "table metrics built"
        );
        Ok(result)
    }
}

/// Derives the metric for a single raw row.
///
/// # Errors
///
/// Returns `CoreError::InvalidRecord` when the row fails validation (empty
/// ISIN, non-finite numeric field). Missing fields are not errors; they
/// leave the dependent analytics unset.
pub fn build_metric(
    record: &RawTradeRecord,
    table: SourceTable,
    config: &EngineConfig,
) -> CoreResult<SecurityMetric> {
    record.validate()?;

    let security_type = table.security_type();
    // GOG tables publish turnover as `volume`, bills and corporates as
    // `volume_traded`.
    let volume = match security_type {
        SecurityType::GogBond => record.volume,
        SecurityType::Tbill | SecurityType::Corporate => record.volume_traded,
    };

    let mut metric = SecurityMetric::new(
        record.date,
        record.isin.clone(),
        security_type,
        liquidity_tier(volume),
    );
    metric.volume = volume;

    let days = record.days_to_maturity;
    match security_type {
        SecurityType::Tbill => {
            if let Some(yields) = record
                .closing_price
                .zip(days)
                .and_then(|(price, days)| tbill_yields(price, days))
            {
                metric.ytm = Some(yields.ytm);
                metric.discount_yield = Some(yields.discount_yield);
                metric.bond_equivalent_yield = Some(yields.bond_equivalent_yield);
            }
            // Duration equals maturity for a discount instrument.
            if let Some(days) = days.filter(|d| *d > 0) {
                metric.modified_duration = Some(round_dp(f64::from(days) / 365.0, 2));
            }
        }
        SecurityType::GogBond | SecurityType::Corporate => {
            let coupon = record
                .security_description
                .as_deref()
                .and_then(extract_coupon);
            metric.coupon_rate = coupon;

            let computed = record
                .closing_price
                .zip(days)
                .and_then(|(price, days)| bond_ytm(price, coupon, days));
            metric.ytm = match security_type {
                SecurityType::GogBond => computed.or(record.closing_yield),
                SecurityType::Corporate => computed
                    .or(record.closing_yield)
                    .or(record.day_high_yield),
                SecurityType::Tbill => unreachable!(),
            };

            if let (Some(ytm), Some(days)) = (metric.ytm, days) {
                if days > 0 {
                    metric.modified_duration =
                        modified_duration(ytm, f64::from(days) / 365.0, coupon);
                }
            }
        }
    }

    metric.real_yield = metric
        .ytm
        .map(|ytm| round_dp(ytm - config.inflation_rate, 2));
    metric.hl_spread = record
        .day_high_yield
        .zip(record.day_low_yield)
        .map(|(high, low)| round_dp((high - low).abs(), 4));

    Ok(metric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gfim_core::types::LiquidityTier;
    use gfim_storage::InMemoryStore;

    fn date() -> TradeDate {
        TradeDate::parse("2026-01-30").unwrap()
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_tbill_metric() {
        let mut row = RawTradeRecord::new(date(), "TB1");
        row.closing_price = Some(96.5);
        row.days_to_maturity = Some(91);
        row.volume_traded = Some(2_000_000.0);
        row.day_high_yield = Some(14.2);
        row.day_low_yield = Some(13.8);

        let metric = build_metric(&row, SourceTable::TreasuryBills, &config()).unwrap();
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
        // 91/365 years, two places
        assert_relative_eq!(metric.modified_duration.unwrap(), 0.25, epsilon = 1e-9);
        // real yield = 14.5476 - 23.2
        assert_relative_eq!(metric.real_yield.unwrap(), -8.65, epsilon = 1e-9);
    }

    #[test]
    fn test_tbill_without_price_has_no_yields() {
        let mut row = RawTradeRecord::new(date(), "TB2");
        row.days_to_maturity = Some(182);
        row.volume_traded = Some(100.0);

        let metric = build_metric(&row, SourceTable::TreasuryBills, &config()).unwrap();
        assert_eq!(metric.ytm, None);
        assert_eq!(metric.discount_yield, None);
        assert_eq!(metric.real_yield, None);
        // Maturity is still known, so duration is.
        assert_relative_eq!(metric.modified_duration.unwrap(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_gog_bond_metric_with_coupon() {
        let mut row = RawTradeRecord::new(date(), "GHGGOG000001");
        row.closing_price = Some(95.0);
        row.days_to_maturity = Some(365);
        row.security_description = Some("GOG-BD-30/01/27-A6139-1838-20.00".to_string());
        row.volume = Some(15_000_000.0);

        let metric = build_metric(&row, SourceTable::NewGogNotesAndBonds, &config()).unwrap();
        assert_eq!(metric.security_type, SecurityType::GogBond);
        assert_eq!(metric.coupon_rate, Some(20.0));
        // (20 + 5/1) / 97.5 × 100
        assert_relative_eq!(metric.ytm.unwrap(), 25.641, epsilon = 1e-3);
        assert_eq!(metric.liquidity_score, LiquidityTier::High);
        assert!(metric.modified_duration.is_some());
        assert_eq!(metric.discount_yield, None);
    }

    #[test]
    fn test_gog_bond_falls_back_to_closing_yield() {
        let mut row = RawTradeRecord::new(date(), "GHGGOG000002");
        row.closing_yield = Some(24.5);
        row.volume = Some(500.0);

        let metric = build_metric(&row, SourceTable::OldGogNotesAndBonds, &config()).unwrap();
        assert_eq!(metric.ytm, Some(24.5));
        assert_relative_eq!(metric.real_yield.unwrap(), 1.3, epsilon = 1e-9);
        // No maturity, no duration.
        assert_eq!(metric.modified_duration, None);
    }

    #[test]
    fn test_corporate_fallback_order() {
        let mut row = RawTradeRecord::new(date(), "GHCORP000001");
        row.closing_yield = Some(19.0);
        row.day_high_yield = Some(21.0);

        let metric = build_metric(&row, SourceTable::Corporate, &config()).unwrap();
        assert_eq!(metric.ytm, Some(19.0));

        row.closing_yield = None;
        let metric = build_metric(&row, SourceTable::Corporate, &config()).unwrap();
        assert_eq!(metric.ytm, Some(21.0));
    }

    #[test]
    fn test_invalid_row_is_an_error() {
        let mut row = RawTradeRecord::new(date(), "GHGGOG000003");
        row.closing_price = Some(f64::INFINITY);
        assert!(build_metric(&row, SourceTable::NewGogNotesAndBonds, &config()).is_err());

        let empty_isin = RawTradeRecord::new(date(), "");
        assert!(build_metric(&empty_isin, SourceTable::Corporate, &config()).is_err());
    }

    #[test]
    fn test_builder_skips_bad_rows_and_continues() {
        let store = Arc::new(InMemoryStore::new());
        let mut good = RawTradeRecord::new(date(), "TB1");
        good.closing_price = Some(96.5);
        good.days_to_maturity = Some(91);
        let mut bad = RawTradeRecord::new(date(), "TB2");
        bad.closing_price = Some(f64::NAN);
        store
            .upsert_raw_records(SourceTable::TreasuryBills, &[good, bad])
            .unwrap();

        let builder = MetricBuilder::new(store, config());
        let out = builder
            .build_for_table(SourceTable::TreasuryBills, date())
            .unwrap();
        assert_eq!(out.metrics.len(), 1);
        assert_eq!(out.skipped, 1);
        assert_eq!(out.metrics[0].isin, "TB1");
    }

    #[test]
    fn test_empty_table_is_not_an_error() {
        let store = Arc::new(InMemoryStore::new());
        let builder = MetricBuilder::new(store, config());
        let out = builder
            .build_for_table(SourceTable::Corporate, date())
            .unwrap();
        assert!(out.metrics.is_empty());
        assert_eq!(out.skipped, 0);
    }
}
