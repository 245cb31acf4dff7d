// ============================================================================
// Tier Symbol Ladder
// Fixed short tags followed by an open-ended alphabetic odometer
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed symbols at the bottom of the ladder, ordered by increasing magnitude.
pub const FIXED_SYMBOLS: [&str; 5] = ["", "k", "M", "B", "T"];

/// First alphabetic symbol, one step above the last fixed symbol.
const FIRST_LADDER_SYMBOL: &str = "aa";

const ALPHABET_LEN: u64 = 26;

/// Scratch buffer for odometer steps; ladder symbols rarely exceed a few letters.
type Letters = SmallVec<[u8; 8]>;

/// An immutable tier label.
///
/// A symbol is either one of [`FIXED_SYMBOLS`] or a lowercase alphabetic tag
/// of length >= 2. Symbols are totally ordered by the magnitude they denote:
/// fixed tags by table position, then ladder symbols by length and letters.
/// The order agrees with [`index`](TierSymbol::index) wherever the index does
/// not saturate.
///
/// # Example
/// ```
/// use idle_money::numeric::TierSymbol;
///
/// let t = TierSymbol::new("T").unwrap();
/// assert_eq!(t.next().as_str(), "aa");
/// assert_eq!(TierSymbol::new("zz").unwrap().next().as_str(), "aaa");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TierSymbol(String);

impl TierSymbol {
    /// Validate and wrap symbol text.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` for anything that is neither a fixed tag nor a
    /// lowercase alphabetic tag of length >= 2.
    pub fn new(symbol: &str) -> MoneyResult<Self> {
        if !Self::is_valid(symbol) {
            return Err(MoneyError::InvalidSymbol(symbol.to_string()));
        }
        Ok(Self(symbol.to_string()))
    }

    /// The empty symbol (index 0, magnitude 1).
    #[inline]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns true if `candidate` would be accepted by [`TierSymbol::new`].
    pub fn is_valid(candidate: &str) -> bool {
        FIXED_SYMBOLS.contains(&candidate)
            || (candidate.len() > 1 && candidate.bytes().all(|b| b.is_ascii_lowercase()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position in [`FIXED_SYMBOLS`], or `None` for ladder symbols.
    #[inline]
    fn fixed_position(&self) -> Option<usize> {
        FIXED_SYMBOLS.iter().position(|s| *s == self.0)
    }

    // ========================================================================
    // Ladder Navigation
    // ========================================================================

    /// The symbol one tier above this one. The ladder has no top.
    pub fn next(&self) -> Self {
        match self.fixed_position() {
            Some(pos) if pos + 1 < FIXED_SYMBOLS.len() => {
                Self(FIXED_SYMBOLS[pos + 1].to_string())
            },
            Some(_) => Self(FIRST_LADDER_SYMBOL.to_string()),
            None => Self(increment(&self.0)),
        }
    }

    /// The symbol one tier below this one.
    ///
    /// # Errors
    /// Returns `NoPredecessor` for the empty symbol.
    pub fn prev(&self) -> MoneyResult<Self> {
        if self.is_empty() {
            return Err(MoneyError::NoPredecessor);
        }

        let symbol = match self.fixed_position() {
            // pos >= 1 because the empty symbol was handled above
            Some(pos) => FIXED_SYMBOLS[pos - 1].to_string(),
            None if self.0 == FIRST_LADDER_SYMBOL => {
                FIXED_SYMBOLS[FIXED_SYMBOLS.len() - 1].to_string()
            },
            None => decrement(&self.0),
        };
        Ok(Self(symbol))
    }

    /// Ordinal distance from the empty symbol.
    ///
    /// Closed form: every ladder symbol shorter than this one, plus this
    /// symbol's odometer reading in base 26. Equal to the number of `prev`
    /// steps back to the empty symbol. Saturates at `u64::MAX` from 14
    /// letters on (whose magnitude is infinite anyway), so ordering never
    /// goes through the index.
    pub fn index(&self) -> u64 {
        if let Some(pos) = self.fixed_position() {
            return pos as u64;
        }

        let mut shorter: u64 = 0;
        let mut width = ALPHABET_LEN * ALPHABET_LEN;
        for _ in FIRST_LADDER_SYMBOL.len()..self.0.len() {
            shorter = shorter.saturating_add(width);
            width = width.saturating_mul(ALPHABET_LEN);
        }

        let reading = self.0.bytes().fold(0u64, |acc, b| {
            acc.saturating_mul(ALPHABET_LEN)
                .saturating_add(u64::from(b - b'a'))
        });

        (FIXED_SYMBOLS.len() as u64)
            .saturating_add(shorter)
            .saturating_add(reading)
    }
}

/// Odometer increment; a carry off the left end grows the symbol by one letter.
fn increment(symbol: &str) -> String {
    let mut letters: Letters = SmallVec::from_slice(symbol.as_bytes());
    for letter in letters.iter_mut().rev() {
        if *letter == b'z' {
            *letter = b'a';
        } else {
            *letter += 1;
            return collect(&letters);
        }
    }
    letters.insert(0, b'a');
    collect(&letters)
}

/// Odometer decrement; a borrow off the left end shrinks the symbol by one letter.
fn decrement(symbol: &str) -> String {
    let mut letters: Letters = SmallVec::from_slice(symbol.as_bytes());
    for letter in letters.iter_mut().rev() {
        if *letter == b'a' {
            *letter = b'z';
        } else {
            *letter -= 1;
            return collect(&letters);
        }
    }
    letters.remove(0);
    collect(&letters)
}

#[inline]
fn collect(letters: &[u8]) -> String {
    letters.iter().map(|&b| char::from(b)).collect()
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for TierSymbol {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TierSymbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.fixed_position(), other.fixed_position()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            // Same-length ladder symbols order like their odometer readings.
            (None, None) => self
                .0
                .len()
                .cmp(&other.0.len())
                .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes())),
        }
    }
}

impl FromStr for TierSymbol {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TierSymbol {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !Self::is_valid(&value) {
            return Err(MoneyError::InvalidSymbol(value));
        }
        Ok(Self(value))
    }
}

impl From<TierSymbol> for String {
    fn from(symbol: TierSymbol) -> Self {
        symbol.0
    }
}

impl fmt::Debug for TierSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TierSymbol({:?})", self.0)
    }
}

impl fmt::Display for TierSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn sym(s: &str) -> TierSymbol {
        TierSymbol::new(s).unwrap()
    }

    /// Maps arbitrary bytes onto a valid symbol: short seeds pick a fixed
    /// tag, longer ones spell a ladder tag of up to six letters.
    fn symbol_from_seed(seed: &[u8]) -> TierSymbol {
        if seed.len() < 2 {
            let pos = seed.first().map_or(0, |b| *b as usize % FIXED_SYMBOLS.len());
            return sym(FIXED_SYMBOLS[pos]);
        }
        let text: String = seed
            .iter()
            .take(6)
            .map(|b| char::from(b'a' + b % 26))
            .collect();
        sym(&text)
    }

    #[test]
    fn test_validity() {
        for fixed in FIXED_SYMBOLS {
            assert!(TierSymbol::is_valid(fixed));
        }
        assert!(TierSymbol::is_valid("aa"));
        assert!(TierSymbol::is_valid("zzz"));

        assert!(!TierSymbol::is_valid("x"));
        assert!(!TierSymbol::is_valid("K"));
        assert!(!TierSymbol::is_valid("a1"));
        assert!(!TierSymbol::is_valid("Ab"));
        assert!(!TierSymbol::is_valid("."));
    }

    #[test]
    fn test_invalid_symbol_error() {
        assert_eq!(
            TierSymbol::new("x"),
            Err(MoneyError::InvalidSymbol("x".to_string()))
        );
        assert!("k".parse::<TierSymbol>().is_ok());
        assert!(TierSymbol::try_from("b2".to_string()).is_err());
    }

    #[test]
    fn test_fixed_ladder() {
        assert_eq!(TierSymbol::empty().next(), sym("k"));
        assert_eq!(sym("k").next(), sym("M"));
        assert_eq!(sym("M").next(), sym("B"));
        assert_eq!(sym("B").next(), sym("T"));
        assert_eq!(sym("T").next(), sym("aa"));
    }

    #[test]
    fn test_alphabetic_carry() {
        assert_eq!(sym("aa").next(), sym("ab"));
        assert_eq!(sym("az").next(), sym("ba"));
        assert_eq!(sym("zz").next(), sym("aaa"));
        assert_eq!(sym("azz").next(), sym("baa"));

        assert_eq!(sym("ba").prev().unwrap(), sym("az"));
        assert_eq!(sym("aaa").prev().unwrap(), sym("zz"));
        assert_eq!(sym("aa").prev().unwrap(), sym("T"));
        assert_eq!(sym("k").prev().unwrap(), TierSymbol::empty());
    }

    #[test]
    fn test_empty_has_no_predecessor() {
        assert_eq!(TierSymbol::empty().prev(), Err(MoneyError::NoPredecessor));
    }

    #[test]
    fn test_index_values() {
        assert_eq!(TierSymbol::empty().index(), 0);
        assert_eq!(sym("k").index(), 1);
        assert_eq!(sym("T").index(), 4);
        assert_eq!(sym("aa").index(), 5);
        assert_eq!(sym("ba").index(), 31);
        assert_eq!(sym("zz").index(), 680);
        assert_eq!(sym("aaa").index(), 681);
    }

    #[test]
    fn test_index_matches_stepping() {
        let mut symbol = TierSymbol::empty();
        for expected in 0..20_000u64 {
            assert_eq!(symbol.index(), expected, "at {}", symbol);
            symbol = symbol.next();
        }
    }

    #[test]
    fn test_deep_symbol_index_is_cheap() {
        // Walking back one step at a time would take ~2.4e9 iterations here.
        let deep = sym("zzzzzzz");
        assert_eq!(deep.index(), 5 + (2..=7).map(|n| 26u64.pow(n)).sum::<u64>() - 1);
    }

    #[test]
    fn test_ordering() {
        assert!(TierSymbol::empty() < sym("k"));
        assert!(sym("T") < sym("aa"));
        assert!(sym("zz") < sym("aaa"));
        assert!(sym("aaa") > sym("az"));
    }

    #[test]
    fn test_ordering_past_index_saturation() {
        let low = sym("aaaaaaaaaaaaaaa");
        let high = sym("zzzzzzzzzzzzzzz");
        assert_eq!(low.index(), u64::MAX);
        assert_eq!(high.index(), u64::MAX);

        assert!(low < high);
        assert_ne!(low.cmp(&high), Ordering::Equal);
        assert!(low.next() > low);
        assert!(high.next() > high);
        assert_eq!(high.next(), sym("aaaaaaaaaaaaaaaa"));
        assert!(sym("T") < low);
        assert!(sym("zzzzzzzzzzzzz") < sym("aaaaaaaaaaaaaa"));
    }

    quickcheck! {
        fn prop_prev_inverts_next(seed: Vec<u8>) -> bool {
            let s = symbol_from_seed(&seed);
            s.next().prev() == Ok(s)
        }

        fn prop_next_increments_index(seed: Vec<u8>) -> bool {
            let s = symbol_from_seed(&seed);
            s.next().index() == s.index() + 1
        }

        fn prop_next_is_greater(seed: Vec<u8>) -> bool {
            let s = symbol_from_seed(&seed);
            s.next() > s
        }
    }
}
