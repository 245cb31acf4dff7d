// ============================================================================
// Codec Configuration
// Tunables for the compact text notation
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits kept by the compact notation ("1.49k", "700aa").
pub const DEFAULT_MAX_SIGNIFICANT_DIGITS: usize = 3;

/// Configuration for [`TextCodec`](crate::numeric::TextCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CodecConfig {
    /// Digits kept (the decimal point does not count) before the tier
    /// symbol. Extra digits are cut off, not rounded.
    pub max_significant_digits: usize,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self {
            max_significant_digits: DEFAULT_MAX_SIGNIFICANT_DIGITS,
        }
    }

    /// Builder method: Set the number of significant digits
    pub fn with_max_significant_digits(mut self, digits: usize) -> Self {
        self.max_significant_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if self.max_significant_digits == 0 {
            return Err(MoneyError::InvalidConfig(
                "at least one significant digit is required",
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CodecConfig {
    /// HUD-style notation: three digits ("1.49k")
    pub fn compact() -> Self {
        Self::new()
    }

    /// Tooltip-style notation: six digits ("1.49999M")
    pub fn detailed() -> Self {
        Self::new().with_max_significant_digits(6)
    }
}
