//! Provides a safe, self-contained type for representing fiat currency amounts.

use std::fmt;

use num_bigint::BigUint;
use thiserror::Error;

use crate::exact_decimal::pow10;
use crate::exact_decimal::ExactDecimal;
use crate::exact_decimal::ParseAmountError;
use crate::fiat_currency::FiatCurrency;

/// An error that can occur when reading a fiat amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFiatAmountError {
    /// The text is not a non-negative decimal (e.g. "abc", "1.2.3").
    #[error("invalid fiat amount: {0}")]
    InvalidFormat(#[from] ParseAmountError),
    /// The value has more decimal places than the currency supports (e.g. "$1.234").
    #[error("{currency:?} amounts have at most {max} decimal places")]
    TooManyDecimals { currency: FiatCurrency, max: u32 },
}

/// Represents a non-negative monetary value in a specific fiat currency.
///
/// The amount is stored in the currency's smallest unit (e.g. cents for USD)
/// as a big integer, so even the fiat value of an enormous token balance is
/// exact. The default `Display` implementation formats this as a plain
/// numeric string with exactly the currency's number of decimals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FiatAmount {
    minor_units: BigUint,
    currency: FiatCurrency,
}

impl FiatAmount {
    /// Creates a new `FiatAmount` directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// use api::fiat_amount::FiatAmount;
    /// use api::fiat_currency::FiatCurrency;
    ///
    /// // 23106 cents represents $231.06
    /// let amount = FiatAmount::new_from_minor(23106u32.into(), FiatCurrency::USD);
    /// assert_eq!(amount.to_string(), "231.06");
    /// ```
    pub fn new_from_minor(minor_units: BigUint, currency: FiatCurrency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Parses a string into a `FiatAmount`.
    ///
    /// Fails when the text is not a plain non-negative decimal or when it has
    /// more significant decimal places than the currency supports. Trailing
    /// zeros do not count, so "1.50" and "1.500" are both $1.50.
    ///
    /// # Examples
    /// ```
    /// use api::fiat_amount::FiatAmount;
    /// use api::fiat_amount::ParseFiatAmountError;
    /// use api::fiat_currency::FiatCurrency;
    /// use num_bigint::BigUint;
    ///
    /// let amount = FiatAmount::new_from_str("123.45", FiatCurrency::USD).unwrap();
    /// assert_eq!(amount.as_minor_units(), &BigUint::from(12345u32));
    ///
    /// let err = FiatAmount::new_from_str("1.234", FiatCurrency::USD).unwrap_err();
    /// assert!(matches!(err, ParseFiatAmountError::TooManyDecimals { max: 2, .. }));
    /// ```
    pub fn new_from_str(s: &str, currency: FiatCurrency) -> Result<Self, ParseFiatAmountError> {
        Self::new_from_decimal(&s.trim().parse()?, currency)
    }

    /// Converts a major-unit decimal, rejecting sub-minor-unit precision.
    pub fn new_from_decimal(
        value: &ExactDecimal,
        currency: FiatCurrency,
    ) -> Result<Self, ParseFiatAmountError> {
        let max = currency.decimals() as u32;
        if value.scale() > max {
            return Err(ParseFiatAmountError::TooManyDecimals { currency, max });
        }
        Ok(Self::new_from_minor(value.to_scaled_integer(max), currency))
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> &BigUint {
        &self.minor_units
    }

    /// The same value as an exact decimal in major units.
    pub fn to_decimal(&self) -> ExactDecimal {
        ExactDecimal::new(self.minor_units.clone(), self.currency.decimals() as u32)
    }

    /// Formats the amount with its currency symbol (e.g., "$231.06").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }

    /// Formats the amount with its currency code (e.g., "231.06 USD").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats as a numeric string with the currency's fixed decimals (e.g. "1.00").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as u32;
        if decimals == 0 {
            return write!(f, "{}", self.minor_units);
        }

        let divisor = pow10(decimals);
        let major_units = &self.minor_units / &divisor;
        let minor_units = &self.minor_units % &divisor;

        write!(
            f,
            "{}.{:0>width$}",
            major_units,
            minor_units.to_str_radix(10),
            width = decimals as usize
        )
    }
}
