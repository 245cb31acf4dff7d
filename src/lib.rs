// ============================================================================
// Idle Money Library
// Tiered big-number values with a compact text notation
// ============================================================================

//! # Idle Money
//!
//! Very large, non-negative quantities for ever-growing game economies,
//! displayed compactly ("1.4k", "3M", "700aa") while keeping arithmetic on
//! the underlying magnitude.
//!
//! ## Features
//!
//! - **Infinite tier ladder**: `""`, `k`, `M`, `B`, `T`, then `aa`, `ab`, ...
//!   `zz`, `aaa`, ... each tier 1000x the previous
//! - **Greedy decomposition** of any magnitude into sparse `(tier, count)` pairs
//! - **Checked arithmetic** that never produces a negative quantity
//! - **Compact text codec** truncating to three significant digits
//! - **Optional serde support** storing the lossless tier breakdown
//!
//! ## Example
//!
//! ```rust
//! use idle_money::prelude::*;
//!
//! let gold = Quantity::from_magnitude(1_000.0).unwrap();
//! let loot: Quantity = "809".parse().unwrap();
//!
//! let total = gold.checked_add(&loot).unwrap();
//! assert_eq!(total.reduce(), 1_809.0);
//! assert_eq!(total.to_string(), "1.8k");
//! assert_eq!(total.round().to_string(), "1k");
//!
//! let spent = total.checked_sub(&Quantity::from(9u32)).unwrap();
//! assert_eq!(spent, "1.8k".parse::<Quantity>().unwrap());
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::numeric::{MoneyError, MoneyResult, Quantity, TextCodec, Tier, TierSymbol};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_economy() {
        // Income ticks accumulate into a wallet
        let mut wallet = Quantity::zero();
        let income = Quantity::from_tiered_magnitude(1.5, "M").unwrap();
        for _ in 0..1000 {
            wallet = wallet.checked_add(&income).unwrap();
        }
        assert_eq!(wallet.reduce(), 1.5e9);
        assert_eq!(wallet.to_string(), "1.5B");

        // Upgrade costs scale geometrically
        let cost = Quantity::from_magnitude(1e9).unwrap();
        let upgraded = cost.checked_scale(1.15).unwrap();
        assert_eq!(upgraded.to_string(), "1.15B");

        // Can afford one, not two
        let remaining = wallet.checked_sub(&upgraded).unwrap();
        assert_eq!(remaining.to_string(), "350M");
        assert!(remaining.checked_sub(&upgraded).is_err());

        // Display and parse agree within truncation
        let shown = remaining.to_string();
        let parsed: Quantity = shown.parse().unwrap();
        assert_eq!(parsed, remaining);
    }

    #[test]
    fn test_breakdown_reporting() {
        let q = Quantity::from_magnitude(4_002_000_017.0).unwrap();
        let parts: Vec<String> = q.decompose().iter().map(|p| p.to_string()).collect();
        assert_eq!(parts, vec!["4B", "2M", "17"]);
        assert_eq!(q.dominant_tier().map(Tier::as_str), Some("B"));
    }

    #[test]
    fn test_errors_surface_to_callers() {
        assert!(matches!(
            "1.2.3k".parse::<Quantity>(),
            Err(MoneyError::MalformedNumber(_))
        ));
        assert!(matches!(
            Quantity::from_magnitude(-3.0),
            Err(MoneyError::OutOfRange(_))
        ));
        assert!(matches!(
            TierSymbol::empty().prev(),
            Err(MoneyError::NoPredecessor)
        ));
    }
}
