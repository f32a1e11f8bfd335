//! Conversion between base units and the asset's human-facing display unit.
//!
//! Rendering truncates rather than rounds, so a displayed balance never
//! overstates what is actually held.

use crate::base_unit_amount::BaseUnitAmount;
use crate::exact_decimal::pow10;
use crate::exact_decimal::ExactDecimal;
use crate::exact_decimal::ParseAmountError;

/// Renders `amount` in display units, where one display unit is `10^exponent`
/// base units.
///
/// The fraction is truncated to `max_fraction_digits` and trailing zeros are
/// stripped. Dust that truncates away renders as `"0"`.
pub fn to_display(amount: &BaseUnitAmount, exponent: u32, max_fraction_digits: u32) -> String {
    let scale = pow10(exponent);
    let integer = amount.value() / &scale;
    let fraction = amount.value() % &scale;

    let width = exponent as usize;
    let fraction = format!("{:0>width$}", fraction.to_str_radix(10));
    let keep = max_fraction_digits.min(exponent) as usize;
    let fraction = fraction[..keep].trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Parses display-unit text (e.g. `"1.5"`) into base units.
///
/// Fraction digits beyond `exponent` are dropped, never rounded up.
pub fn from_display(text: &str, exponent: u32) -> Result<BaseUnitAmount, ParseAmountError> {
    let value: ExactDecimal = text.parse()?;
    Ok(from_display_decimal(&value, exponent))
}

/// Same as [`from_display`] for an already parsed value.
pub fn from_display_decimal(value: &ExactDecimal, exponent: u32) -> BaseUnitAmount {
    BaseUnitAmount::new(value.to_scaled_integer(exponent))
}

/// The exact display-unit value of `amount`, without truncation.
pub fn to_display_decimal(amount: &BaseUnitAmount, exponent: u32) -> ExactDecimal {
    ExactDecimal::new(amount.value().clone(), exponent)
}
