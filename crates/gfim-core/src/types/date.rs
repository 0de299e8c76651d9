//! Trading date type for daily batch runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A trading date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` used as the key of
/// every daily record. Serialized as an ISO 8601 string (`YYYY-MM-DD`),
/// which also gives lexicographic storage keys chronological order.
///
/// # Example
///
/// ```rust
/// use gfim_core::types::TradeDate;
///
/// let date = TradeDate::parse("2025-03-14").unwrap();
/// assert_eq!(date.to_string(), "2025-03-14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(TradeDate)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))?;
        // chrono accepts unpadded fields; storage keys need the canonical
        // zero-padded form, so require the round trip to match.
        if date.format("%Y-%m-%d").to_string() != s {
            return Err(CoreError::invalid_date(format!("Cannot parse: {s}")));
        }
        Ok(TradeDate(date))
    }

    /// Returns today's date in local time.
    #[must_use]
    pub fn today() -> Self {
        TradeDate(chrono::Local::now().date_naive())
    }

    /// Adds a number of calendar days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        TradeDate(self.0 + chrono::Duration::days(days))
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TradeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for TradeDate {
    fn from(date: NaiveDate) -> Self {
        TradeDate(date)
    }
}

impl From<TradeDate> for NaiveDate {
    fn from(date: TradeDate) -> Self {
        date.0
    }
}
