// ============================================================================
// Magnitude Tiers
// A tier symbol bound to its power-of-1000 magnitude
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::symbol::TierSymbol;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal exponent step between neighbouring tiers (x1000).
pub const TIER_EXPONENT_STEP: u64 = 3;

/// Powers of 1000 that are exactly representable as f64.
const EXACT_MAGNITUDES: [f64; 8] = [1e0, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18, 1e21];

/// Largest decimal exponent below f64 overflow.
const MAX_FINITE_EXPONENT: u64 = 308;

/// Largest count a normalized breakdown holds at one tier.
pub const MAX_TIER_COUNT: u64 = 999;

/// Highest index where `count × magnitude` is exact for counts up to 1000
/// (`1000 × 5^15` stays below 2^53).
const EXACT_PRODUCT_MAX_INDEX: u64 = 5;

/// A magnitude step identified by a [`TierSymbol`].
///
/// The magnitude is `10^(3 × index)` where `index` is the symbol's ordinal.
/// Tiers compare by magnitude and are equal iff their symbols are equal.
///
/// # Example
/// ```
/// use idle_money::numeric::Tier;
///
/// let k = Tier::from_symbol("k").unwrap();
/// assert_eq!(k.magnitude(), 1000.0);
/// assert_eq!(Tier::closest_at_or_below(1_500_000.0).unwrap().as_str(), "M");
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Tier {
    symbol: TierSymbol,
    index: u64,
    magnitude: f64,
}

impl Tier {
    /// Wrap an already validated symbol.
    pub fn new(symbol: TierSymbol) -> Self {
        let index = symbol.index();
        Self {
            symbol,
            index,
            magnitude: magnitude_of(index),
        }
    }

    /// Validate symbol text and build its tier.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` if the text is not a valid tier symbol.
    pub fn from_symbol(symbol: &str) -> MoneyResult<Self> {
        TierSymbol::new(symbol).map(Self::new)
    }

    /// The empty tier (magnitude 1).
    #[inline]
    pub fn empty() -> Self {
        Self::new(TierSymbol::empty())
    }

    /// The tier one step (x1000) above this one.
    #[inline]
    pub fn next(&self) -> Self {
        Self::new(self.symbol.next())
    }

    /// The tier one step below this one.
    ///
    /// # Errors
    /// Returns `NoPredecessor` for the empty tier.
    #[inline]
    pub fn prev(&self) -> MoneyResult<Self> {
        self.symbol.prev().map(Self::new)
    }

    /// Largest tier whose magnitude is <= `amount`.
    ///
    /// Scans upward from the empty tier.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `amount` is below 1, NaN or infinite.
    pub fn closest_at_or_below(amount: f64) -> MoneyResult<Self> {
        if !amount.is_finite() || amount < 1.0 {
            return Err(MoneyError::OutOfRange(amount));
        }

        let mut tier = Self::empty();
        loop {
            let next = tier.next();
            if next.magnitude > amount {
                return Ok(tier);
            }
            tier = next;
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Numeric magnitude of this tier. Infinite past the f64 range.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn symbol(&self) -> &TierSymbol {
        &self.symbol
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.symbol.as_str()
    }

    /// Ordinal of the tier's symbol (0 for the empty tier).
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// `count` units of this tier, correctly rounded.
    ///
    /// Agrees with [`magnitude`](Tier::magnitude) at `count == 1`, and with
    /// the next tier's magnitude at `count == 1000`.
    pub fn scaled(&self, count: u64) -> f64 {
        if count == 0 {
            return 0.0;
        }
        if self.index <= EXACT_PRODUCT_MAX_INDEX && count <= MAX_TIER_COUNT + 1 {
            return count as f64 * self.magnitude;
        }
        if self.magnitude.is_infinite() {
            return f64::INFINITY;
        }
        format!("{}e{}", count, self.exponent())
            .parse()
            .unwrap_or(f64::INFINITY)
    }

    /// Largest count (at most [`MAX_TIER_COUNT`]) whose scaled value fits
    /// within `amount`.
    pub fn max_count_within(&self, amount: f64) -> u64 {
        let estimate = (amount / self.magnitude).floor();
        let mut count = if estimate.is_nan() || estimate < 0.0 {
            0
        } else {
            estimate.min(MAX_TIER_COUNT as f64) as u64
        };
        // The division rounds; settle against exact products either way.
        while count > 0 && self.scaled(count) > amount {
            count -= 1;
        }
        while count < MAX_TIER_COUNT && self.scaled(count + 1) <= amount {
            count += 1;
        }
        count
    }

    /// A decimal literal in units of this tier, as one correctly rounded
    /// magnitude (`"2.01"` at `k` is exactly 2010).
    ///
    /// # Errors
    /// Returns `MalformedNumber` if `digits` is not a decimal literal.
    pub fn scaled_decimal(&self, digits: &str) -> MoneyResult<f64> {
        format!("{}e{}", digits, self.exponent())
            .parse()
            .map_err(|_| MoneyError::MalformedNumber(digits.to_string()))
    }

    #[inline]
    fn exponent(&self) -> u64 {
        self.index.saturating_mul(TIER_EXPONENT_STEP)
    }
}

fn magnitude_of(index: u64) -> f64 {
    if let Some(exact) = usize::try_from(index)
        .ok()
        .and_then(|i| EXACT_MAGNITUDES.get(i))
    {
        return *exact;
    }

    let exponent = index.saturating_mul(TIER_EXPONENT_STEP);
    if exponent > MAX_FINITE_EXPONENT {
        return f64::INFINITY;
    }
    // Parsing gives the correctly rounded power; repeated x1000 drifts.
    format!("1e{}", exponent).parse().unwrap_or(f64::INFINITY)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Tier {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Tier {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Tier {}

impl Hash for Tier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl PartialOrd for Tier {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tier {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbol.cmp(&other.symbol)
    }
}

impl From<TierSymbol> for Tier {
    fn from(symbol: TierSymbol) -> Self {
        Self::new(symbol)
    }
}

impl TryFrom<String> for Tier {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TierSymbol::try_from(value).map(Self::new)
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        tier.symbol.into()
    }
}

impl fmt::Debug for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tier({:?}, 1e{})",
            self.symbol.as_str(),
            self.exponent()
        )
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
