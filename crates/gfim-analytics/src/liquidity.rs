//! Volume-based liquidity classification.

use gfim_core::types::LiquidityTier;

/// Classify a day's traded volume into a liquidity tier.
///
/// Strictly above ten million is High, strictly above one million is
/// Medium, everything else (including no reported volume) is Low.
#[must_use]
pub fn liquidity_tier(volume: Option<f64>) -> LiquidityTier {
    match volume {
        Some(v) if v > 10_000_000.0 => LiquidityTier::High,
        Some(v) if v > 1_000_000.0 => LiquidityTier::Medium,
        _ => LiquidityTier::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(liquidity_tier(Some(25_000_000.0)), LiquidityTier::High);
        assert_eq!(liquidity_tier(Some(5_000_000.0)), LiquidityTier::Medium);
        assert_eq!(liquidity_tier(Some(500_000.0)), LiquidityTier::Low);
        assert_eq!(liquidity_tier(None), LiquidityTier::Low);
    }

    #[test]
    fn test_boundaries_are_strict() {
        assert_eq!(liquidity_tier(Some(10_000_000.0)), LiquidityTier::Medium);
        assert_eq!(liquidity_tier(Some(10_000_001.0)), LiquidityTier::High);
        assert_eq!(liquidity_tier(Some(1_000_000.0)), LiquidityTier::Low);
        assert_eq!(liquidity_tier(Some(1_000_001.0)), LiquidityTier::Medium);
        assert_eq!(liquidity_tier(Some(0.0)), LiquidityTier::Low);
    }
}
