//! Locale-tolerant numeric input parsing

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,]").expect("static pattern is valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("empty numeric input")]
    Empty,

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Parse user-typed amounts the way the input controls accept them.
///
/// Currency symbols, signs and spaces are stripped. A comma is the decimal
/// separator with dots as grouping ("1.234,56" is 1234.56); multiple dots
/// without a comma are grouping ("1.234.567"); a single dot is a decimal
/// point ("0.50"). Range policy is [`FieldSpec::clamp`], not the parser.
///
/// [`FieldSpec::clamp`]: crate::FieldSpec::clamp
pub fn parse_decimal(raw: &str) -> Result<f64, InputError> {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    if cleaned.is_empty() {
        return Err(InputError::Empty);
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else if cleaned.matches('.').count() > 1 {
        cleaned.replace('.', "")
    } else {
        cleaned.into_owned()
    };

    normalized
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal_with_dot_grouping() {
        assert_eq!(parse_decimal("1.234,56").unwrap(), 1234.56);
        assert_eq!(parse_decimal("R$ 1.000,00").unwrap(), 1000.0);
        assert_eq!(parse_decimal("18,33").unwrap(), 18.33);
    }

    #[test]
    fn test_dot_only_inputs() {
        assert_eq!(parse_decimal("0.50").unwrap(), 0.50);
        assert_eq!(parse_decimal("1.234.567").unwrap(), 1_234_567.0);
        // A single dot is a decimal point, never grouping.
        assert_eq!(parse_decimal("1.000").unwrap(), 1.0);
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_decimal("100000").unwrap(), 100_000.0);
        assert_eq!(parse_decimal("US$ 20").unwrap(), 20.0);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(parse_decimal(""), Err(InputError::Empty));
        assert_eq!(parse_decimal("abc"), Err(InputError::Empty));
        assert!(matches!(
            parse_decimal("..,"),
            Err(InputError::InvalidNumber(_))
        ));
    }
}
