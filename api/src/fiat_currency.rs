//! Fiat currencies an amount can be quoted in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency: its ISO 4217 code, symbol and minor-unit precision.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD,
    BHD,
    BRL,
    CAD,
    CHF,
    CNY,
    EUR,
    GBP,
    INR,
    JPY,
    KRW,
    KWD,
    MXN,
    #[default]
    USD,
    VND,
}

impl FiatCurrency {
    /// Number of minor-unit digits a rendered amount carries.
    ///
    /// Two for most currencies (cents), zero for JPY, three for KWD.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY | Self::KRW | Self::VND => 0,
            Self::KWD | Self::BHD => 3,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD => "A$",
            Self::BHD => ".د.ب",
            Self::BRL => "R$",
            Self::CAD => "C$",
            Self::CHF => "CHF",
            Self::CNY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
            Self::JPY => "¥",
            Self::KRW => "₩",
            Self::KWD => "د.ك",
            Self::MXN => "MX$",
            Self::USD => "$",
            Self::VND => "₫",
        }
    }

    /// ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AUD => "Australian Dollar",
            Self::BHD => "Bahraini Dinar",
            Self::BRL => "Brazilian Real",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::INR => "Indian Rupee",
            Self::JPY => "Japanese Yen",
            Self::KRW => "South Korean Won",
            Self::KWD => "Kuwaiti Dinar",
            Self::MXN => "Mexican Peso",
            Self::USD => "United States Dollar",
            Self::VND => "Vietnamese Đồng",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("usd"), Ok(FiatCurrency::USD));
        assert_eq!(FiatCurrency::from_str("Eur"), Ok(FiatCurrency::EUR));
        assert!(FiatCurrency::from_str("xyz").is_err());
    }

    #[test]
    fn code_matches_variant_name() {
        for currency in FiatCurrency::iter() {
            assert_eq!(FiatCurrency::from_str(currency.code()), Ok(currency));
            assert!(!currency.symbol().is_empty());
            assert!(!currency.name().is_empty());
        }
    }
}
