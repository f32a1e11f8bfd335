//! Provides a specialized map for storing the native asset's price against various fiat currencies.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::exact_decimal::ExactDecimal;
use crate::exchange_rate::ExchangeRate;
use crate::fiat_currency::FiatCurrency;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePriceMapError {
    #[error("expected CODE:PRICE, got {0:?}")]
    InvalidEntry(String),
    #[error("unknown fiat currency {0:?}")]
    UnknownCurrency(String),
    #[error("invalid price for {0:?}")]
    InvalidPrice(FiatCurrency),
}

/// A map holding the price of one display unit in various fiat currencies.
///
/// Prices are kept as exact decimals. Lookups hand out an [`ExchangeRate`],
/// which is `Unavailable` for currencies that have no (or a zero) price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMap(HashMap<FiatCurrency, ExactDecimal>);

impl PriceMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inserts or updates the price for a given currency, returning the old one.
    pub fn insert(&mut self, currency: FiatCurrency, price: ExactDecimal) -> Option<ExactDecimal> {
        self.0.insert(currency, price)
    }

    pub fn get(&self, currency: FiatCurrency) -> Option<&ExactDecimal> {
        self.0.get(&currency)
    }

    /// The exchange rate for `currency`.
    pub fn rate_for(&self, currency: FiatCurrency) -> ExchangeRate {
        self.get(currency)
            .cloned()
            .map(ExchangeRate::new)
            .unwrap_or_default()
    }

    /// Reads prices from the `FIAT_PRICES` env var, e.g. `USD:231.06,EUR:212.5`.
    ///
    /// A missing or malformed variable yields an empty map, meaning no fiat
    /// rate is known.
    pub fn from_env() -> Self {
        match env::var("FIAT_PRICES") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                dioxus_logger::tracing::warn!("ignoring FIAT_PRICES: {}", e);
                Self::new()
            }),
            Err(_) => Self::new(),
        }
    }
}

impl FromStr for PriceMap {
    type Err = ParsePriceMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (code, price) = entry
                .split_once(':')
                .ok_or_else(|| ParsePriceMapError::InvalidEntry(entry.to_string()))?;
            let currency = FiatCurrency::from_str(code.trim())
                .map_err(|_| ParsePriceMapError::UnknownCurrency(code.trim().to_string()))?;
            let price = price
                .trim()
                .parse()
                .map_err(|_| ParsePriceMapError::InvalidPrice(currency))?;
            map.insert(currency, price);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_for_missing_currency_is_unavailable() {
        let map = PriceMap::new();
        assert_eq!(map.rate_for(FiatCurrency::USD), ExchangeRate::Unavailable);
    }

    #[test]
    fn zero_price_is_unavailable() {
        let mut map = PriceMap::new();
        map.insert(FiatCurrency::EUR, ExactDecimal::zero());
        assert!(map.rate_for(FiatCurrency::EUR).is_unavailable());
    }

    #[test]
    fn insert_replaces_previous_price() {
        let mut map = PriceMap::new();
        assert_eq!(map.insert(FiatCurrency::USD, "200".parse().unwrap()), None);
        assert_eq!(
            map.insert(FiatCurrency::USD, "231.06".parse().unwrap()),
            Some("200".parse().unwrap())
        );
        assert_eq!(
            map.rate_for(FiatCurrency::USD),
            ExchangeRate::new("231.06".parse().unwrap())
        );
    }

    #[test]
    fn parses_env_style_list() {
        let map: PriceMap = "USD:231.06, eur:212.5".parse().unwrap();
        assert_eq!(map.get(FiatCurrency::USD), Some(&"231.06".parse().unwrap()));
        assert_eq!(map.get(FiatCurrency::EUR), Some(&"212.5".parse().unwrap()));
        assert_eq!("".parse::<PriceMap>(), Ok(PriceMap::new()));
    }

    #[test]
    fn rejects_malformed_list() {
        assert_eq!(
            "USD=1".parse::<PriceMap>(),
            Err(ParsePriceMapError::InvalidEntry("USD=1".to_string()))
        );
        assert_eq!(
            "XYZ:1".parse::<PriceMap>(),
            Err(ParsePriceMapError::UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(
            "USD:abc".parse::<PriceMap>(),
            Err(ParsePriceMapError::InvalidPrice(FiatCurrency::USD))
        );
    }

    #[test]
    fn serializes_with_currency_keys() {
        let map: PriceMap = "USD:231.06".parse().unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"USD":"231.06"}"#);
        assert_eq!(serde_json::from_str::<PriceMap>(&json).unwrap(), map);
    }
}
