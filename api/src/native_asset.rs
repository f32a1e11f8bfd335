//! Describes the chain's native asset: its ticker, precision and base-unit encoding.

use std::env;

use serde::Deserialize;
use serde::Serialize;

use crate::base_unit_amount::BaseUnitAmount;
use crate::base_unit_amount::BaseUnitEncoding;
use crate::prefs::display_preference::is_truthy;

/// Static facts about the active chain's native asset.
///
/// Which chain is active is decided elsewhere; this only carries what the
/// amount input needs to know about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeAsset {
    ticker: String,
    decimals: u32,
    encoding: BaseUnitEncoding,
    testnet: bool,
    original_ticker: bool,
}

impl NativeAsset {
    pub fn new(ticker: impl Into<String>, decimals: u32, encoding: BaseUnitEncoding) -> Self {
        Self {
            ticker: ticker.into(),
            decimals,
            encoding,
            testnet: false,
            original_ticker: true,
        }
    }

    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.testnet = testnet;
        self
    }

    /// Marks whether the configured ticker is the chain's own native symbol.
    ///
    /// A user-renamed ticker means the price feed may not describe this asset.
    pub fn with_original_ticker(mut self, original_ticker: bool) -> Self {
        self.original_ticker = original_ticker;
        self
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Base-unit digits per display unit (18 for ETH).
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn encoding(&self) -> BaseUnitEncoding {
        self.encoding
    }

    pub fn is_testnet(&self) -> bool {
        self.testnet
    }

    pub fn is_original_ticker(&self) -> bool {
        self.original_ticker
    }

    /// Appends the ticker to display-unit text, e.g. "0.004328 ETH".
    pub fn format_amount(&self, display: &str) -> String {
        format!("{} {}", display, self.ticker)
    }

    /// Canonical owner-facing text for `amount` in this asset's encoding.
    pub fn canonical_string(&self, amount: &BaseUnitAmount) -> String {
        amount.to_canonical_string(self.encoding)
    }

    /// Creates a `NativeAsset` from environment variables, defaulting to ETH.
    ///
    /// # Environment Variables
    /// - `NATIVE_TICKER`: display symbol, e.g. "ETH".
    /// - `NATIVE_DECIMALS`: base-unit digits per display unit.
    /// - `NATIVE_ENCODING`: "hex" or "decimal".
    /// - `NATIVE_TESTNET`: "true" or "1" for a test network.
    /// - `NATIVE_ORIGINAL_TICKER`: "false" or "0" when `NATIVE_TICKER` is a
    ///   user-chosen name rather than the chain's own symbol.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let ticker = lookup("NATIVE_TICKER")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .unwrap_or(default.ticker);

        let decimals = lookup("NATIVE_DECIMALS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(default.decimals);

        let encoding = match lookup("NATIVE_ENCODING") {
            Some(s) if s.eq_ignore_ascii_case("decimal") => BaseUnitEncoding::Decimal,
            Some(s) if s.eq_ignore_ascii_case("hex") => BaseUnitEncoding::Hex,
            _ => default.encoding,
        };

        let testnet = lookup("NATIVE_TESTNET")
            .map(|val| is_truthy(&val))
            .unwrap_or(default.testnet);

        let original_ticker = lookup("NATIVE_ORIGINAL_TICKER")
            .map(|val| is_truthy(&val))
            .unwrap_or(default.original_ticker);

        Self::new(ticker, decimals, encoding)
            .with_testnet(testnet)
            .with_original_ticker(original_ticker)
    }
}

impl Default for NativeAsset {
    fn default() -> Self {
        Self::new("ETH", 18, BaseUnitEncoding::Hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_eth() {
        let asset = NativeAsset::from_lookup(lookup_from(&[]));
        assert_eq!(asset, NativeAsset::default());
        assert_eq!(asset.ticker(), "ETH");
        assert_eq!(asset.decimals(), 18);
        assert!(asset.encoding().is_hex());
        assert!(!asset.is_testnet());
        assert!(asset.is_original_ticker());
    }

    #[test]
    fn reads_overrides() {
        let asset = NativeAsset::from_lookup(lookup_from(&[
            ("NATIVE_TICKER", "BTC"),
            ("NATIVE_DECIMALS", "8"),
            ("NATIVE_ENCODING", "Decimal"),
            ("NATIVE_TESTNET", "1"),
            ("NATIVE_ORIGINAL_TICKER", "false"),
        ]));
        assert_eq!(asset.ticker(), "BTC");
        assert_eq!(asset.decimals(), 8);
        assert!(asset.encoding().is_decimal());
        assert!(asset.is_testnet());
        assert!(!asset.is_original_ticker());
    }

    #[test]
    fn ignores_garbage_decimals() {
        let asset = NativeAsset::from_lookup(lookup_from(&[("NATIVE_DECIMALS", "lots")]));
        assert_eq!(asset.decimals(), 18);
    }

    #[test]
    fn formats_with_ticker() {
        let asset = NativeAsset::default();
        assert_eq!(asset.format_amount("0.004328"), "0.004328 ETH");
        assert_eq!(asset.canonical_string(&BaseUnitAmount::zero()), "0x0");
    }
}
