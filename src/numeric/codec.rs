// ============================================================================
// Text Codec
// Compact, lossy notation: "9", "1.4k", "3M", "700aa"
// ============================================================================
//
// Grammar: [digits]['.' digits]? [symbol]?
//
// Serialization divides by the dominant tier and cuts the digits down to the
// configured width by dropping characters. 1499 becomes "1.49k", never
// "1.5k". Parsing splits off the trailing non-digit run as the symbol and
// scales the literal by its tier in one correctly rounded step, so every
// rendered string parses back to the value it shows.

use super::errors::{MoneyError, MoneyResult};
use super::quantity::Quantity;
use super::tier::Tier;
use crate::config::CodecConfig;

/// Converts quantities to and from compact text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCodec {
    config: CodecConfig,
}

impl TextCodec {
    /// Create a codec from a validated configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration is rejected.
    pub fn new(config: CodecConfig) -> MoneyResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Render `quantity` in units of its dominant tier.
    pub fn serialize(&self, quantity: &Quantity) -> String {
        let tier = quantity.dominant_tier().cloned().unwrap_or_else(Tier::empty);
        let number = quantity.reduce() / tier.magnitude();

        // f64 Display is locale-free and never switches to exponent form.
        let mut text = number.to_string();
        truncate_digits(&mut text, self.config.max_significant_digits);
        trim_fraction(&mut text);

        text.push_str(tier.as_str());
        text
    }

    /// Parse compact text back into a quantity.
    ///
    /// # Errors
    /// - `MalformedNumber` if the numeric part is empty, has more than one
    ///   separator character, or contains anything but digits and separators
    /// - `InvalidSymbol` if the trailing symbol is not a tier symbol
    /// - `OutOfRange` if the number is negative or not representable
    pub fn deserialize(&self, text: &str) -> MoneyResult<Quantity> {
        let split = text
            .char_indices()
            .rev()
            .take_while(|(_, c)| !c.is_ascii_digit())
            .last()
            .map_or(text.len(), |(i, _)| i);
        let (number_part, symbol) = text.split_at(split);

        let number = parse_number(number_part)?;
        let tier = Tier::from_symbol(symbol)?;
        let magnitude = tier.scaled_decimal(number_part)?;
        tracing::trace!(number, symbol, magnitude, "parsed compact notation");
        Quantity::from_magnitude(magnitude)
    }
}

/// Drop trailing characters until at most `max_digits` digits remain.
fn truncate_digits(text: &mut String, max_digits: usize) {
    while text.chars().filter(|c| *c != '.').count() > max_digits {
        text.pop();
    }
}

/// Drop zeros after the decimal point, then a dangling point.
fn trim_fraction(text: &mut String) {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
    }
    if text.ends_with('.') {
        text.pop();
    }
}

/// Punctuation that may sit inside a number. Math and currency signs
/// (`+ < = > | ~ ^ $` and the backtick) are not separators.
fn is_separator(c: char) -> bool {
    c.is_ascii_punctuation()
        && !matches!(c, '+' | '<' | '=' | '>' | '|' | '~' | '^' | '`' | '$')
}

fn parse_number(number_part: &str) -> MoneyResult<f64> {
    let separators = number_part.chars().filter(|c| is_separator(*c)).count();
    let foreign = number_part
        .chars()
        .any(|c| !c.is_ascii_digit() && !is_separator(c));

    if separators > 1 || foreign {
        tracing::debug!(number_part, "rejecting malformed number");
        return Err(MoneyError::MalformedNumber(number_part.to_string()));
    }

    number_part
        .parse()
        .map_err(|_| MoneyError::MalformedNumber(number_part.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
