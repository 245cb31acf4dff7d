// ============================================================================
// Tiered Quantity
// Non-negative magnitude stored as a sparse mixed-radix (base 1000) breakdown
// ============================================================================

use super::codec::TextCodec;
use super::errors::{MoneyError, MoneyResult};
use super::tier::Tier;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Non-negative quantity decomposed into `(tier, count)` pairs.
///
/// Value is `Σ tier.magnitude × count`. Construction decomposes greedily from
/// the largest tier down, so each tier appears at most once and every count
/// lies in `1..=999`. An empty breakdown is zero. Any fractional remainder
/// below 1 is dropped, and the reduced value never exceeds the input.
///
/// Equality, ordering and hashing look only at the reduced value, never at
/// the breakdown itself.
///
/// # Example
/// ```
/// use idle_money::numeric::Quantity;
///
/// let q = Quantity::from_magnitude(1400.0).unwrap();
/// assert_eq!(q.reduce(), 1400.0);
/// assert_eq!(q.decompose().len(), 2);
/// assert_eq!(q.to_string(), "1.4k");
/// ```
#[derive(Clone, Default)]
pub struct Quantity {
    counts: BTreeMap<Tier, u64>,
    /// Sum of the breakdown, accumulated exactly during construction.
    value: f64,
}

impl Quantity {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The zero quantity.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Decompose a raw magnitude into tiers.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `amount` is negative, NaN or infinite.
    pub fn from_magnitude(amount: f64) -> MoneyResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            tracing::debug!(amount, "rejecting magnitude outside the representable range");
            return Err(MoneyError::OutOfRange(amount));
        }

        let mut counts = BTreeMap::new();
        let mut remaining = amount;
        let mut last: Option<Tier> = None;
        while remaining >= 1.0 {
            let mut tier = Tier::closest_at_or_below(remaining)?;
            // Each step lands strictly below the previous one, even when
            // rounding leaves a full unit of the previous tier behind.
            if let Some(last) = &last {
                if tier >= *last {
                    match last.prev() {
                        Ok(below) => tier = below,
                        Err(_) => break,
                    }
                }
            }

            // scaled(count) <= remaining, so remaining never goes negative.
            let count = tier.max_count_within(remaining);
            remaining -= tier.scaled(count);
            tracing::trace!(tier = %tier, count, remaining, "decomposition step");
            if count > 0 {
                counts.insert(tier.clone(), count);
            }
            last = Some(tier);
        }

        Ok(Self {
            counts,
            value: amount - remaining,
        })
    }

    /// Build from `amount` expressed in units of the tier named by `symbol`.
    ///
    /// The shortest decimal form of `amount` is scaled exactly, so
    /// `(2.01, "k")` is 2010, not the 2009.99... a float product gives.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` for a malformed symbol, or `OutOfRange` if the
    /// scaled magnitude is not representable.
    pub fn from_tiered_magnitude(amount: f64, symbol: &str) -> MoneyResult<Self> {
        let tier = Tier::from_symbol(symbol)?;
        if !amount.is_finite() {
            return Err(MoneyError::OutOfRange(amount));
        }
        Self::from_magnitude(tier.scaled_decimal(&amount.to_string())?)
    }

    /// Wraps exactly one tier/count pair.
    fn single(tier: Tier, count: u64) -> Self {
        let mut counts = BTreeMap::new();
        let value = tier.scaled(count);
        if count > 0 {
            counts.insert(tier, count);
        }
        Self { counts, value }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Recombine the breakdown into its raw magnitude.
    ///
    /// Never larger than the magnitude the quantity was built from.
    #[inline]
    pub fn reduce(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest tier present, or `None` for zero.
    #[inline]
    pub fn dominant_tier(&self) -> Option<&Tier> {
        self.counts.keys().next_back()
    }

    /// Count recorded at `tier` (0 when absent).
    pub fn count_at(&self, tier: &Tier) -> u64 {
        self.counts.get(tier).copied().unwrap_or(0)
    }

    /// Breakdown entries in increasing tier order.
    pub fn entries(&self) -> impl Iterator<Item = (&Tier, u64)> + '_ {
        self.counts.iter().map(|(tier, count)| (tier, *count))
    }

    /// One single-tier quantity per entry, dominant tier first.
    pub fn decompose(&self) -> Vec<Quantity> {
        self.counts
            .iter()
            .rev()
            .map(|(tier, count)| Self::single(tier.clone(), *count))
            .collect()
    }

    /// Keep only the dominant tier, discarding everything below it.
    ///
    /// This is display truncation, not arithmetic rounding: 1809 rounds to 1000.
    pub fn round(&self) -> Self {
        match self.counts.iter().next_back() {
            Some((tier, count)) => Self::single(tier.clone(), *count),
            None => Self::zero(),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the sum overflows to infinity.
    pub fn checked_add(&self, rhs: &Self) -> MoneyResult<Self> {
        Self::from_magnitude(self.reduce() + rhs.reduce())
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `InvalidOperation` if `rhs` is larger than `self`.
    pub fn checked_sub(&self, rhs: &Self) -> MoneyResult<Self> {
        let (lhs, rhs) = (self.reduce(), rhs.reduce());
        if rhs > lhs {
            return Err(MoneyError::InvalidOperation(
                "subtraction would yield a negative quantity",
            ));
        }
        Self::from_magnitude(lhs - rhs)
    }

    /// Checked scaling by a real factor.
    ///
    /// Zero is absorbing: scaling zero by any factor, negative included,
    /// yields zero.
    ///
    /// # Errors
    /// - `InvalidOperation` if `factor` is negative and `self` is positive
    /// - `OutOfRange` if the product is not representable (NaN or overflow)
    pub fn checked_scale(&self, factor: f64) -> MoneyResult<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if factor < 0.0 {
            return Err(MoneyError::InvalidOperation(
                "scaling a positive quantity by a negative factor",
            ));
        }
        Self::from_magnitude(self.reduce() * factor)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Quantity {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.reduce() == other.reduce()
    }
}

// Reduced values are always finite, so equality is total.
impl Eq for Quantity {}

impl PartialOrd for Quantity {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.reduce().total_cmp(&other.reduce())
    }
}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduce().to_bits().hash(state);
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        // Any u32 is finite and non-negative, so decomposition cannot fail.
        Self::from_magnitude(f64::from(value)).unwrap_or_default()
    }
}

// Infallible Add/Sub for ergonomics (panics on failure - use checked_* in production)
impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).expect("Quantity addition overflow")
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs)
            .expect("Quantity subtraction below zero")
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Quantity")?;
        f.debug_map()
            .entries(self.counts.iter().rev().map(|(t, c)| (t.as_str(), c)))
            .finish()
    }
}

/// Compact notation with the default codec (`"1.4k"`, `"700aa"`).
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TextCodec::default().serialize(self))
    }
}

impl FromStr for Quantity {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextCodec::default().deserialize(s)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Quantity {
    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `OutOfRange` for negative values.
    pub fn from_decimal(d: rust_decimal::Decimal) -> MoneyResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let amount = d.to_f64().ok_or(MoneyError::OutOfRange(f64::NAN))?;
        if d.is_sign_negative() && !d.is_zero() {
            return Err(MoneyError::OutOfRange(amount));
        }
        Self::from_magnitude(amount)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Returns `None` past `Decimal::MAX` (about 7.9e28, the "ae" tier).
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        rust_decimal::Decimal::from_f64(self.reduce())
    }
}

// ============================================================================
// Serde (lossless tier breakdown, for save files)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Quantity {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.counts.len()))?;
            for (tier, count) in self.counts.iter().rev() {
                map.serialize_entry(tier.as_str(), count)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for Quantity {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = BTreeMap::<String, u64>::deserialize(deserializer)?;

            let mut total = 0.0;
            for (symbol, count) in raw {
                if count == 0 {
                    return Err(D::Error::custom(format!("zero count for tier {:?}", symbol)));
                }
                let tier = Tier::from_symbol(&symbol).map_err(D::Error::custom)?;
                total += tier.scaled(count);
            }

            // Rebuild so an oversized count is carried into the tiers above it.
            Quantity::from_magnitude(total).map_err(D::Error::custom)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
