pub mod amount_field;
pub mod currency_input;
