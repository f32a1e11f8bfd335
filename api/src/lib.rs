//! Conversion and formatting core of the dual-denomination amount input.
//!
//! Amounts live as exact base-unit integers ([`BaseUnitAmount`]). The
//! [`DenominationController`] turns text typed in either the native asset or a
//! fiat currency into such an amount and derives the opposite denomination
//! for display.

pub mod base_unit_amount;
pub mod controller;
pub mod denomination;
pub mod display_unit;
pub mod exact_decimal;
pub mod exchange_rate;
pub mod fiat_amount;
pub mod fiat_conversion;
pub mod fiat_currency;
pub mod input_formatter;
pub mod native_asset;
pub mod prefs;
pub mod price_map;

pub use base_unit_amount::BaseUnitAmount;
pub use base_unit_amount::BaseUnitEncoding;
pub use controller::Conversion;
pub use controller::CurrencyView;
pub use controller::DenominationController;
pub use controller::DisplayAmount;
pub use controller::EditError;
pub use controller::InputOptions;
pub use denomination::Denomination;
pub use exact_decimal::ExactDecimal;
pub use exact_decimal::ParseAmountError;
pub use exchange_rate::ExchangeRate;
pub use fiat_conversion::ConversionError;
