//! Keystroke-level handling of typed amounts.

use crate::exact_decimal::ExactDecimal;
use crate::exact_decimal::ParseAmountError;

/// Filters raw keystroke text down to a plain decimal.
///
/// Keeps ASCII digits and the first `.`, and drops digits past
/// `max_integers` before the point or `max_decimals` after it. Everything
/// else (letters, signs, locale separators) is discarded.
pub fn sanitize(raw: &str, max_integers: usize, max_decimals: usize) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    let mut has_decimal = false;
    let mut integer_digits = 0;
    let mut decimal_digits = 0;

    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            if has_decimal {
                if decimal_digits < max_decimals {
                    sanitized.push(ch);
                    decimal_digits += 1;
                }
            } else if integer_digits < max_integers {
                sanitized.push(ch);
                integer_digits += 1;
            }
        } else if ch == '.' && !has_decimal {
            sanitized.push(ch);
            has_decimal = true;
        }
    }
    sanitized
}

/// Parses typed text as a non-negative, locale-neutral decimal.
///
/// Surrounding whitespace is ignored. An empty field or a lone `.` is zero,
/// so clearing the field resets the amount. Magnitude is never clamped.
pub fn parse(text: &str) -> Result<ExactDecimal, ParseAmountError> {
    let text = text.trim();
    if text.is_empty() || text == "." {
        return Ok(ExactDecimal::zero());
    }
    text.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_digits_and_first_point() {
        assert_eq!(sanitize("1.2.3", 10, 10), "1.23");
        assert_eq!(sanitize("$1,000.50", 10, 10), "1000.50");
        assert_eq!(sanitize("-5", 10, 10), "5");
        assert_eq!(sanitize("abc", 10, 10), "");
    }

    #[test]
    fn sanitize_caps_lengths() {
        assert_eq!(sanitize("123456.123456", 3, 2), "123.12");
        assert_eq!(sanitize(".999", 3, 8), ".999");
    }

    #[test]
    fn parse_accepts_keystroke_states() {
        assert_eq!(parse(""), Ok(ExactDecimal::zero()));
        assert_eq!(parse("."), Ok(ExactDecimal::zero()));
        assert_eq!(parse("1."), Ok("1".parse().unwrap()));
        assert_eq!(parse(" .5 "), Ok("0.5".parse().unwrap()));
    }

    #[test]
    fn parse_rejects_non_numeric_text() {
        assert_eq!(parse("1,5"), Err(ParseAmountError::InvalidCharacter(',')));
        assert_eq!(parse("12 34"), Err(ParseAmountError::InvalidCharacter(' ')));
        assert_eq!(parse("-1"), Err(ParseAmountError::Negative));
        assert_eq!(parse("1e18"), Err(ParseAmountError::InvalidCharacter('e')));
        assert_eq!(parse("1..2"), Err(ParseAmountError::MultipleDecimalPoints));
    }

    #[test]
    fn parse_does_not_clamp_magnitude() {
        let huge = "9".repeat(80);
        assert_eq!(parse(&huge).unwrap().to_string(), huge);
    }
}
