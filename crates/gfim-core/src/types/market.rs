//! Liquidity, alert, and curve-shape classifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume-based liquidity tier for a security on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquidityTier {
    /// Daily volume above ten million.
    High,
    /// Daily volume above one million.
    Medium,
    /// Everything else, including no reported volume.
    Low,
}

impl LiquidityTier {
    /// Returns the canonical string form used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityTier::High => "HIGH",
            LiquidityTier::Medium => "MEDIUM",
            LiquidityTier::Low => "LOW",
        }
    }
}

impl fmt::Display for LiquidityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a security actually traded on the run date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquidityFlag {
    /// Positive volume on the run date.
    Active,
    /// Zero or missing volume; history-based analytics are skipped.
    Stale,
}

impl LiquidityFlag {
    /// Returns the canonical string form used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityFlag::Active => "ACTIVE",
            LiquidityFlag::Stale => "STALE",
        }
    }
}

impl fmt::Display for LiquidityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a market alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Corporate spread over the benchmark curve crossed the threshold.
    SpreadWidening,
    /// Daily volume crossed the spike multiple of the trailing average.
    VolumeSpike,
}

impl AlertType {
    /// Returns the canonical string form used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::SpreadWidening => "SPREAD_WIDENING",
            AlertType::VolumeSpike => "VOLUME_SPIKE",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a market alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    /// Informational only.
    Info,
    /// Needs attention.
    Warning,
}

impl AlertSeverity {
    /// Returns the canonical string form used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Warning => "WARNING",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the daily benchmark yield curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurveShape {
    /// Long yields above short yields.
    Normal,
    /// Slope within half a point of zero.
    Flat,
    /// Short yields above long yields.
    Inverted,
}

impl CurveShape {
    /// Returns the canonical string form used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveShape::Normal => "NORMAL",
            CurveShape::Flat => "FLAT",
            CurveShape::Inverted => "INVERTED",
        }
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
