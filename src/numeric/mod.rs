// ============================================================================
// Numeric Module
// Tiered big-number values for idle-game economies
// ============================================================================
//
// This module provides:
// - TierSymbol: the infinite ladder of tier labels ("", k, M, B, T, aa, ab, ...)
// - Tier: a symbol bound to its power-of-1000 magnitude
// - Quantity: a non-negative value decomposed into (tier, count) pairs
// - TextCodec: the compact, lossy text notation ("1.4k", "700aa")
// - MoneyError: error type shared by all of the above
//
// Design principles:
// - Values are immutable; every operation returns a new value
// - All fallible operations return Result (no panics)
// - Magnitudes are f64; anything below 1 is discarded on construction
// - Symbol indexing is closed-form, never a walk down the ladder

mod codec;
mod errors;
mod quantity;
mod symbol;
mod tier;

pub use codec::TextCodec;
pub use errors::{MoneyError, MoneyResult};
pub use quantity::Quantity;
pub use symbol::{TierSymbol, FIXED_SYMBOLS};
pub use tier::{Tier, MAX_TIER_COUNT, TIER_EXPONENT_STEP};
