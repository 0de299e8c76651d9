//! Raw daily trade record as loaded into a source table.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::TradeDate;

/// One raw trade row.
///
/// All four source tables share this shape; the loader maps whichever
/// columns a table publishes and leaves the rest `None`. GOG tables report
/// turnover in `volume`, treasury bills and corporates in `volume_traded`.
///
/// Uniqueness within a table is (date, isin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTradeRecord {
    /// Trading date of the row.
    pub date: TradeDate,
    /// Security identifier.
    pub isin: String,
    /// Tenor text as published (e.g. "91 DAY").
    pub tenor: Option<String>,
    /// Free-text security description.
    pub security_description: Option<String>,
    /// Issuer name (corporate table only).
    pub issuer: Option<String>,
    /// Opening yield, percent.
    pub opening_yield: Option<f64>,
    /// Closing yield, percent.
    pub closing_yield: Option<f64>,
    /// Opening clean price per 100 face.
    pub opening_price: Option<f64>,
    /// Closing clean price per 100 face.
    pub closing_price: Option<f64>,
    /// Face value traded (GOG tables).
    pub volume: Option<f64>,
    /// Face value traded (T-bill and corporate tables).
    pub volume_traded: Option<f64>,
    /// Number of trades.
    pub number_traded: Option<u32>,
    /// Lowest traded yield of the day, percent.
    pub day_low_yield: Option<f64>,
    /// Highest traded yield of the day, percent.
    pub day_high_yield: Option<f64>,
    /// Calendar days to maturity.
    pub days_to_maturity: Option<u32>,
    /// Maturity date as published.
    pub maturity_date: Option<TradeDate>,
}

impl RawTradeRecord {
    /// Creates a minimal record with only the required keys set.
    #[must_use]
    pub fn new(date: TradeDate, isin: impl Into<String>) -> Self {
        Self {
            date,
            isin: isin.into(),
            tenor: None,
            security_description: None,
            issuer: None,
            opening_yield: None,
            closing_yield: None,
            opening_price: None,
            closing_price: None,
            volume: None,
            volume_traded: None,
            number_traded: None,
            day_low_yield: None,
            day_high_yield: None,
            days_to_maturity: None,
            maturity_date: None,
        }
    }

    /// Validates the row for metric derivation.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` for an empty ISIN or a non-finite
    /// numeric field. Missing fields are fine; they only suppress the
    /// analytics that need them.
    pub fn validate(&self) -> CoreResult<()> {
        if self.isin.trim().is_empty() {
            return Err(CoreError::invalid_record("<missing>", "empty ISIN"));
        }
        let numerics = [
            ("opening_yield", self.opening_yield),
            ("closing_yield", self.closing_yield),
            ("opening_price", self.opening_price),
            ("closing_price", self.closing_price),
            ("volume", self.volume),
            ("volume_traded", self.volume_traded),
            ("day_low_yield", self.day_low_yield),
            ("day_high_yield", self.day_high_yield),
        ];
        for (field, value) in numerics {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CoreError::invalid_record(
                        self.isin.clone(),
                        format!("non-finite {field}: {v}"),
                    ));
                }
            }
        }
        Ok(())
    }
}
