//! Free-form conversion expressions.
//!
//! Reads text like `"$12 USD to GBP"` or `"€1.23 eur"` into an amount and
//! up to two currency codes. The amount is whatever numeral remains once
//! everything but digits, `-` and `.` is thrown away; the codes come from
//! the letters on either side of the first separator keyword.

use crate::core::currency::CurrencyCode;
use crate::core::error::ConvertError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Keywords accepted only as standalone words. `to` also matches inside a word.
const WORD_SEPARATORS: [&str; 2] = ["in", "as"];

/// Every separator keyword is two bytes long.
const SEPARATOR_LEN: usize = 2;

/// Outcome of parsing an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub amount: f64,
    /// Currency before the separator, letters only, uppercase.
    pub from: Option<CurrencyCode>,
    /// Text after the separator, trimmed and uppercase.
    pub to: Option<CurrencyCode>,
}

/// Parse a conversion expression.
///
/// # Examples
///
/// ```
/// use currency_convert::parse::expression::parse;
///
/// let parsed = parse("$12 usd to gbp").unwrap();
/// assert_eq!(parsed.amount, 12.0);
/// assert_eq!(parsed.from.unwrap().as_str(), "USD");
/// assert_eq!(parsed.to.unwrap().as_str(), "GBP");
/// ```
///
/// # Errors
///
/// [`ConvertError::InvalidAmount`] when the expression holds no numeral.
pub fn parse(expression: &str) -> Result<ParseResult, ConvertError> {
    let amount = extract_amount(expression)
        .ok_or_else(|| ConvertError::InvalidAmount(expression.to_string()))?;

    let (from_segment, to_segment) = match find_separator(expression) {
        Some(at) => (
            &expression[..at],
            Some(&expression[at + SEPARATOR_LEN..]),
        ),
        None => (expression, None),
    };

    let from: String = from_segment
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let to = to_segment
        .map(|segment| segment.trim().to_uppercase())
        .filter(|segment| !segment.is_empty());

    let result = ParseResult {
        amount,
        from: (!from.is_empty()).then(|| CurrencyCode::new(from)),
        to: to.map(CurrencyCode::new),
    };
    debug!("parsed {:?} as {:?}", expression, result);
    Ok(result)
}

/// Pull the amount out of an expression.
///
/// Drops every character other than digits, `-` and `.`, then reads the
/// longest leading numeral of what is left: an optional `-`, digits, and
/// an optional fraction. Anything after that numeral is ignored, so
/// `"1.2.3"` reads as `1.2`.
pub fn extract_amount(expression: &str) -> Option<f64> {
    let numeric: String = expression
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    leading_numeral(&numeric)
}

fn leading_numeral(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = bytes.first() == Some(&b'-');
    if negative {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &text[int_start..pos];

    let mut frac_digits = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &text[frac_start..end];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let numeral = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    numeral.parse().ok()
}

/// Byte offset of the first separator keyword, if any.
fn find_separator(expression: &str) -> Option<usize> {
    expression.char_indices().find_map(|(at, _)| {
        let candidate = expression.get(at..at + SEPARATOR_LEN)?;
        if candidate.eq_ignore_ascii_case("to") {
            return Some(at);
        }
        let is_word = WORD_SEPARATORS
            .iter()
            .any(|keyword| candidate.eq_ignore_ascii_case(keyword));
        (is_word && stands_alone(expression, at)).then_some(at)
    })
}

fn stands_alone(expression: &str, at: usize) -> bool {
    let before = expression[..at].chars().next_back();
    let after = expression[at + SEPARATOR_LEN..].chars().next();
    !before.is_some_and(char::is_alphabetic) && !after.is_some_and(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Option<CurrencyCode> {
        Some(CurrencyCode::new(s))
    }

    #[test]
    fn test_amount_and_from_only() {
        let parsed = parse("$12 USD").unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.from, code("USD"));
        assert_eq!(parsed.to, None);
    }

    #[test]
    fn test_float_amount() {
        let parsed = parse("1.23 GBP").unwrap();
        assert_eq!(parsed.amount, 1.23);
        assert_eq!(parsed.from, code("GBP"));
    }

    #[test]
    fn test_full_expression_any_case() {
        for expression in ["$12 USD TO GBP", "$12 usd to gbp", "$12 Usd tO Gbp"] {
            let parsed = parse(expression).unwrap();
            assert_eq!(parsed.amount, 12.0);
            assert_eq!(parsed.from, code("USD"));
            assert_eq!(parsed.to, code("GBP"));
        }
    }

    #[test]
    fn test_in_and_as_separators() {
        for expression in ["1.23 gbp in eur", "1.23 gbp as eur", "1.23 GBP IN EUR"] {
            let parsed = parse(expression).unwrap();
            assert_eq!(parsed.amount, 1.23);
            assert_eq!(parsed.from, code("GBP"));
            assert_eq!(parsed.to, code("EUR"));
        }
    }

    #[test]
    fn test_in_inside_a_code_is_not_a_separator() {
        let parsed = parse("100 INR as USD").unwrap();
        assert_eq!(parsed.from, code("INR"));
        assert_eq!(parsed.to, code("USD"));

        let parsed = parse("100 INR").unwrap();
        assert_eq!(parsed.from, code("INR"));
        assert_eq!(parsed.to, None);
    }

    #[test]
    fn test_to_matches_inside_a_word() {
        // "TOP" is split at its leading "TO".
        let parsed = parse("5 TOP").unwrap();
        assert_eq!(parsed.from, None);
        assert_eq!(parsed.to, code("P"));
    }

    #[test]
    fn test_first_separator_wins() {
        let parsed = parse("3 eur in usd to gbp").unwrap();
        assert_eq!(parsed.from, code("EUR"));
        assert_eq!(parsed.to, code("USD TO GBP"));
    }

    #[test]
    fn test_pure_number() {
        let parsed = parse("12").unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.from, None);
        assert_eq!(parsed.to, None);
    }

    #[test]
    fn test_zero_is_an_amount() {
        assert_eq!(parse("0").unwrap().amount, 0.0);
    }

    #[test]
    fn test_empty_to_segment() {
        let parsed = parse("10 usd to   ").unwrap();
        assert_eq!(parsed.from, code("USD"));
        assert_eq!(parsed.to, None);
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(
            parse("").unwrap_err(),
            ConvertError::InvalidAmount(String::new())
        );
        assert!(parse("usd to gbp").is_err());
        assert!(parse("--").is_err());
    }

    #[test]
    fn test_extract_amount_prefix_rules() {
        assert_eq!(extract_amount("€1.23 eur"), Some(1.23));
        assert_eq!(extract_amount("-4.5 usd"), Some(-4.5));
        assert_eq!(extract_amount("1.2.3"), Some(1.2));
        assert_eq!(extract_amount(".5"), Some(0.5));
        assert_eq!(extract_amount("7."), Some(7.0));
        assert_eq!(extract_amount("1,000"), Some(1000.0));
        assert_eq!(extract_amount("12-3"), Some(12.0));
        assert_eq!(extract_amount("--12"), None);
        assert_eq!(extract_amount("."), None);
    }
}
