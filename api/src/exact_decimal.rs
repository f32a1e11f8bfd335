//! An exact, non-negative decimal number backed by a big integer.
//!
//! Parsed user input and exchange rates are carried as `ExactDecimal` so that
//! no conversion ever goes through floating point.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing amount text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The text contains no digits at all.
    #[error("amount is empty")]
    Empty,
    /// The text carries a minus sign.
    #[error("amount must not be negative")]
    Negative,
    /// The text has more than one decimal point (e.g. "1.2.3").
    #[error("amount has more than one decimal point")]
    MultipleDecimalPoints,
    /// The text holds something other than digits and a decimal point.
    #[error("invalid character {0:?} in amount")]
    InvalidCharacter(char),
}

/// A non-negative decimal value: `digits / 10^scale`.
///
/// Values are kept normalized (no trailing fractional zeros), so the derived
/// equality compares numeric values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExactDecimal {
    digits: BigUint,
    scale: u32,
}

impl ExactDecimal {
    /// Creates a decimal from raw digits and a scale, normalizing trailing zeros.
    pub fn new(digits: BigUint, scale: u32) -> Self {
        let mut digits = digits;
        let mut scale = scale;
        let ten = BigUint::from(10u32);
        while scale > 0 && !digits.is_zero() && (&digits % &ten).is_zero() {
            digits /= &ten;
            scale -= 1;
        }
        if digits.is_zero() {
            scale = 0;
        }
        Self { digits, scale }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_integer(value: impl Into<BigUint>) -> Self {
        Self::new(value.into(), 0)
    }

    pub fn digits(&self) -> &BigUint {
        &self.digits
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Returns `self * 10^scale` as an integer, dropping any digits beyond `scale`.
    pub fn to_scaled_integer(&self, scale: u32) -> BigUint {
        if self.scale <= scale {
            &self.digits * pow10(scale - self.scale)
        } else {
            &self.digits / pow10(self.scale - scale)
        }
    }
}

impl FromStr for ExactDecimal {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('-') {
            return Err(ParseAmountError::Negative);
        }

        let (integer, fraction) = s.split_once('.').unwrap_or((s, ""));
        if fraction.contains('.') {
            return Err(ParseAmountError::MultipleDecimalPoints);
        }
        if integer.is_empty() && fraction.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        if let Some(bad) = integer
            .chars()
            .chain(fraction.chars())
            .find(|ch| !ch.is_ascii_digit())
        {
            return Err(ParseAmountError::InvalidCharacter(bad));
        }

        let all_digits = format!("{integer}{fraction}");
        let digits =
            BigUint::parse_bytes(all_digits.as_bytes(), 10).ok_or(ParseAmountError::Empty)?;

        Ok(Self::new(digits, fraction.len() as u32))
    }
}

impl TryFrom<String> for ExactDecimal {
    type Error = ParseAmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExactDecimal> for String {
    fn from(value: ExactDecimal) -> Self {
        value.to_string()
    }
}

/// Formats as plain positional notation, e.g. "0.0000001" or "231.06".
impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits.to_str_radix(10);
        if self.scale == 0 {
            return f.write_str(&digits);
        }

        let scale = self.scale as usize;
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{integer}.{fraction}")
    }
}

/// `10^exp` as a big integer.
pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Integer division rounding half away from zero (half-up for non-negative values).
///
/// `denominator` must be non-zero.
pub(crate) fn div_round_half_up(numerator: &BigUint, denominator: &BigUint) -> BigUint {
    (numerator * 2u32 + denominator) / (denominator * 2u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_normalizes() {
        assert_eq!(dec("231.060"), dec("231.06"));
        assert_eq!(dec("1.").to_string(), "1");
        assert_eq!(dec(".5").to_string(), "0.5");
        assert_eq!(dec("000.000"), ExactDecimal::zero());
        assert_eq!(dec("0.0000001").to_string(), "0.0000001");
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!("".parse::<ExactDecimal>(), Err(ParseAmountError::Empty));
        assert_eq!(".".parse::<ExactDecimal>(), Err(ParseAmountError::Empty));
        assert_eq!("-1".parse::<ExactDecimal>(), Err(ParseAmountError::Negative));
        assert_eq!(
            "1.2.3".parse::<ExactDecimal>(),
            Err(ParseAmountError::MultipleDecimalPoints)
        );
        assert_eq!(
            "1e5".parse::<ExactDecimal>(),
            Err(ParseAmountError::InvalidCharacter('e'))
        );
        assert_eq!(
            "+1".parse::<ExactDecimal>(),
            Err(ParseAmountError::InvalidCharacter('+'))
        );
    }

    #[test]
    fn scaled_integer_truncates_excess_digits() {
        assert_eq!(dec("1.239").to_scaled_integer(2), BigUint::from(123u32));
        assert_eq!(dec("1.2").to_scaled_integer(3), BigUint::from(1200u32));
    }

    #[test]
    fn rounds_half_up() {
        let n = BigUint::from(5u32);
        assert_eq!(div_round_half_up(&n, &BigUint::from(2u32)), BigUint::from(3u32));
        assert_eq!(div_round_half_up(&n, &BigUint::from(3u32)), BigUint::from(2u32));
        assert_eq!(div_round_half_up(&n, &BigUint::from(4u32)), BigUint::from(1u32));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&dec("231.06")).unwrap();
        assert_eq!(json, "\"231.06\"");
        let back: ExactDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dec("231.06"));
        assert!(serde_json::from_str::<ExactDecimal>("\"abc\"").is_err());
    }
}
