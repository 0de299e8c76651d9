//! Append-only market alert record.

use serde::{Deserialize, Serialize};

use crate::types::{AlertSeverity, AlertType, TradeDate};

/// One market alert.
///
/// Alerts are an append-only audit trail; re-running a date appends again
/// rather than replacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAlert {
    /// Trading date the alert refers to.
    pub date: TradeDate,
    /// Security the alert refers to.
    pub isin: String,
    /// Alert classification.
    pub alert_type: AlertType,
    /// Human-readable alert text.
    pub alert_message: String,
    /// Alert severity.
    pub severity: AlertSeverity,
}

impl MarketAlert {
    /// Creates an alert.
    #[must_use]
    pub fn new(
        date: TradeDate,
        isin: impl Into<String>,
        alert_type: AlertType,
        alert_message: impl Into<String>,
        severity: AlertSeverity,
    ) -> Self {
        Self {
            date,
            isin: isin.into(),
            alert_type,
            alert_message: alert_message.into(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let alert = MarketAlert::new(
            TradeDate::from_ymd(2025, 3, 14).unwrap(),
            "GHCORP000001",
            AlertType::SpreadWidening,
            "Corporate spread at 5.50% vs benchmark 14.50%",
            AlertSeverity::Info,
        );
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["alert_type"], "SPREAD_WIDENING");
        assert_eq!(json["severity"], "INFO");

        let parsed: MarketAlert = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, alert);
    }
}
