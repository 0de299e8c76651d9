//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use gfim_core::constants::{GHANA_INFLATION_RATE, GHANA_POLICY_RATE};

use crate::error::{EngineError, EngineResult};

/// Engine configuration.
///
/// Every field has a default, so a config file only needs the overrides.
/// The analytic thresholds default to the values the historical silver
/// layer was produced with; override them only for what-if runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Headline inflation rate used for real yields, percent.
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Central bank policy rate carried on the daily summary, percent.
    #[serde(default = "default_policy_rate")]
    pub policy_rate: f64,

    /// Today's volume must reach this multiple of the trailing average to
    /// count as a spike.
    #[serde(default = "default_volume_spike_ratio")]
    pub volume_spike_ratio: f64,

    /// A corporate spread strictly above this many points raises an alert.
    #[serde(default = "default_spread_alert_threshold")]
    pub spread_alert_threshold: f64,

    /// How many historical metric rows feed the trailing volume average.
    #[serde(default = "default_volume_history_rows")]
    pub volume_history_rows: usize,

    /// Storage path for the embedded database.
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

fn default_inflation_rate() -> f64 {
    GHANA_INFLATION_RATE
}

fn default_policy_rate() -> f64 {
    GHANA_POLICY_RATE
}

fn default_volume_spike_ratio() -> f64 {
    3.0
}

fn default_spread_alert_threshold() -> f64 {
    5.0
}

fn default_volume_history_rows() -> usize {
    30
}

fn default_storage_path() -> String {
    "./data/gfim.redb".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            inflation_rate: default_inflation_rate(),
            policy_rate: default_policy_rate(),
            volume_spike_ratio: default_volume_spike_ratio(),
            spread_alert_threshold: default_spread_alert_threshold(),
            volume_history_rows: default_volume_history_rows(),
            storage_path: default_storage_path(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            EngineError::Config(format!("cannot read {}: {e}", path.as_ref().display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            EngineError::Config(format!("cannot parse {}: {e}", path.as_ref().display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.inflation_rate, 23.2);
        assert_eq!(config.policy_rate, 29.0);
        assert_eq!(config.volume_spike_ratio, 3.0);
        assert_eq!(config.spread_alert_threshold, 5.0);
        assert_eq!(config.volume_history_rows, 30);
        assert_eq!(config.storage_path, "./data/gfim.redb");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gfim.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "inflation_rate = 21.5").unwrap();
        writeln!(file, "storage_path = \"/tmp/market.redb\"").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.inflation_rate, 21.5);
        assert_eq!(config.storage_path, "/tmp/market.redb");
        assert_eq!(config.volume_spike_ratio, 3.0);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = EngineConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
