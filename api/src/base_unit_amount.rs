//! The ground-truth amount: an exact count of an asset's smallest units.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::display_unit;
use crate::exact_decimal::ParseAmountError;

/// How an asset writes base-unit integers as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum BaseUnitEncoding {
    /// Lowercase hex with a `0x` prefix on output; the prefix is optional on input.
    #[default]
    Hex,
    /// Plain decimal digits.
    Decimal,
}

/// A non-negative quantity of base units (e.g. wei).
///
/// Immutable once constructed. Arithmetic on it is exact big-integer math.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BaseUnitAmount(BigUint);

impl BaseUnitAmount {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parses an owner-supplied base-unit string.
    ///
    /// Empty text (or a bare `0x`) is zero. Hex input may omit the prefix, as
    /// in `"de0b6b3a7640000"`.
    pub fn from_canonical_str(s: &str, encoding: BaseUnitEncoding) -> Result<Self, ParseAmountError> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(ParseAmountError::Negative);
        }

        let (digits, radix) = match encoding {
            BaseUnitEncoding::Hex => (
                s.strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s),
                16,
            ),
            BaseUnitEncoding::Decimal => (s, 10),
        };

        if digits.is_empty() {
            return Ok(Self::zero());
        }
        if let Some(bad) = digits.chars().find(|ch| !ch.is_digit(radix)) {
            return Err(ParseAmountError::InvalidCharacter(bad));
        }

        BigUint::parse_bytes(digits.as_bytes(), radix)
            .map(Self)
            .ok_or(ParseAmountError::Empty)
    }

    /// Formats in the asset's canonical encoding: no leading zeros, zero is
    /// `"0x0"` or `"0"`, never empty.
    pub fn to_canonical_string(&self, encoding: BaseUnitEncoding) -> String {
        match encoding {
            BaseUnitEncoding::Hex => format!("0x{}", self.0.to_str_radix(16)),
            BaseUnitEncoding::Decimal => self.0.to_str_radix(10),
        }
    }

    /// Builds an amount from display-unit text such as `"0.004328"`.
    pub fn from_display(text: &str, exponent: u32) -> Result<Self, ParseAmountError> {
        display_unit::from_display(text, exponent)
    }

    /// Renders in display units, truncated to `max_fraction_digits`.
    pub fn to_display(&self, exponent: u32, max_fraction_digits: u32) -> String {
        display_unit::to_display(self, exponent, max_fraction_digits)
    }
}

impl From<BigUint> for BaseUnitAmount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for BaseUnitAmount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for BaseUnitAmount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

/// Displays the base-unit count in decimal.
impl fmt::Display for BaseUnitAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
