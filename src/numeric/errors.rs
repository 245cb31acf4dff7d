// ============================================================================
// Money Errors
// Error types for tier symbols, quantity arithmetic and the text codec
// ============================================================================

use std::fmt;

/// Errors that can occur while building, combining or parsing money values.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyError {
    /// Symbol text is neither a fixed tag nor a lowercase alphabetic tag of length >= 2
    InvalidSymbol(String),
    /// Magnitude is negative, non-finite, or below the smallest tier
    OutOfRange(f64),
    /// Numeric part of a serialized value is not a well-formatted number
    MalformedNumber(String),
    /// Operation would produce a negative or otherwise unrepresentable quantity
    InvalidOperation(&'static str),
    /// `prev` requested on the empty symbol
    NoPredecessor,
    /// Codec configuration was rejected
    InvalidConfig(&'static str),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidSymbol(symbol) => {
                write!(f, "invalid symbol: unknown tier symbol {:?}", symbol)
            },
            MoneyError::OutOfRange(amount) => {
                write!(f, "out of range: {} is not a representable magnitude", amount)
            },
            MoneyError::MalformedNumber(number) => {
                write!(f, "malformed number: {:?} is not a well-formatted number", number)
            },
            MoneyError::InvalidOperation(reason) => write!(f, "invalid operation: {}", reason),
            MoneyError::NoPredecessor => write!(f, "the empty symbol has no previous one"),
            MoneyError::InvalidConfig(reason) => write!(f, "invalid codec config: {}", reason),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
