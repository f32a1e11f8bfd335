//! Conversion between display units and fiat through an exchange rate.
//!
//! Both directions use exact big-integer math and round half-up, each to its
//! own precision: fiat to the currency's minor unit, display units to a
//! caller-chosen number of fraction digits.

use thiserror::Error;

use crate::base_unit_amount::BaseUnitAmount;
use crate::display_unit;
use crate::exact_decimal::div_round_half_up;
use crate::exact_decimal::pow10;
use crate::exact_decimal::ExactDecimal;
use crate::exact_decimal::ParseAmountError;
use crate::exchange_rate::ExchangeRate;
use crate::fiat_amount::FiatAmount;
use crate::fiat_amount::ParseFiatAmountError;
use crate::fiat_currency::FiatCurrency;

/// Fraction digits kept when turning a fiat amount into display units.
pub const DEFAULT_FIAT_INPUT_DECIMALS: u32 = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("exchange rate is unavailable")]
    RateUnavailable,
    #[error(transparent)]
    Parse(#[from] ParseAmountError),
    #[error(transparent)]
    FiatAmount(#[from] ParseFiatAmountError),
}

/// Converts a display-unit amount to fiat: `display * rate`, rounded half-up
/// to the currency's minor unit.
pub fn to_fiat(
    display: &ExactDecimal,
    rate: &ExchangeRate,
    currency: FiatCurrency,
) -> Result<FiatAmount, ConversionError> {
    let rate = rate.known().ok_or(ConversionError::RateUnavailable)?;

    let numerator = display.digits() * rate.digits() * pow10(currency.decimals() as u32);
    let denominator = pow10(display.scale() + rate.scale());

    Ok(FiatAmount::new_from_minor(
        div_round_half_up(&numerator, &denominator),
        currency,
    ))
}

/// Converts a fiat amount to display-unit text: `fiat / rate`, rounded
/// half-up to `max_fraction_digits`, trailing zeros stripped.
pub fn from_fiat(
    fiat: &ExactDecimal,
    rate: &ExchangeRate,
    max_fraction_digits: u32,
) -> Result<String, ConversionError> {
    let rate = rate.known().ok_or(ConversionError::RateUnavailable)?;

    let numerator = fiat.digits() * pow10(rate.scale() + max_fraction_digits);
    let denominator = rate.digits() * pow10(fiat.scale());
    let scaled = div_round_half_up(&numerator, &denominator);

    Ok(ExactDecimal::new(scaled, max_fraction_digits).to_string())
}

/// Fiat value of a base-unit amount, computed from its exact display value.
pub fn amount_to_fiat(
    amount: &BaseUnitAmount,
    exponent: u32,
    rate: &ExchangeRate,
    currency: FiatCurrency,
) -> Result<FiatAmount, ConversionError> {
    to_fiat(&display_unit::to_display_decimal(amount, exponent), rate, currency)
}

/// Base-unit amount for a fiat value: [`from_fiat`] then
/// [`display_unit::from_display`].
pub fn fiat_to_amount(
    fiat: &ExactDecimal,
    rate: &ExchangeRate,
    exponent: u32,
    max_fraction_digits: u32,
) -> Result<BaseUnitAmount, ConversionError> {
    let display = from_fiat(fiat, rate, max_fraction_digits)?;
    Ok(display_unit::from_display(&display, exponent)?)
}
