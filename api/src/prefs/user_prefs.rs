use std::env;

use serde::Deserialize;
use serde::Serialize;

use super::display_preference::is_truthy;
use super::display_preference::DisplayPreference;
use crate::controller::Conversion;
use crate::controller::InputOptions;
use crate::exchange_rate::ExchangeRate;
use crate::fiat_currency::FiatCurrency;
use crate::native_asset::NativeAsset;
use crate::price_map::PriceMap;

/// Represents all user prefs that shape the amount input.
///
/// Loading and saving them is up to the application; by default they are read
/// from env vars.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    display_preference: DisplayPreference,
    hide_secondary: bool,
    show_fiat_in_testnets: bool,
    use_currency_rate_check: bool,
}

impl UserPrefs {
    pub fn new(display_preference: DisplayPreference) -> Self {
        Self {
            display_preference,
            hide_secondary: false,
            show_fiat_in_testnets: false,
            use_currency_rate_check: true,
        }
    }

    pub fn with_hide_secondary(mut self, hide_secondary: bool) -> Self {
        self.hide_secondary = hide_secondary;
        self
    }

    pub fn with_show_fiat_in_testnets(mut self, show_fiat_in_testnets: bool) -> Self {
        self.show_fiat_in_testnets = show_fiat_in_testnets;
        self
    }

    pub fn with_use_currency_rate_check(mut self, use_currency_rate_check: bool) -> Self {
        self.use_currency_rate_check = use_currency_rate_check;
        self
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }

    pub fn display_preference_mut(&mut self) -> &mut DisplayPreference {
        &mut self.display_preference
    }

    pub fn hide_secondary(&self) -> bool {
        self.hide_secondary
    }

    /// Reads the preferences from env vars.
    ///
    /// # Environment Variables
    /// Those of [`DisplayPreference::from_env`], plus
    /// - `HIDE_SECONDARY`: "true" to hide the converted value.
    /// - `SHOW_FIAT_IN_TESTNETS`: "true" to price test-network coins.
    /// - `USE_CURRENCY_RATE_CHECK`: "false" to disable fiat rates entirely.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str, default: bool| lookup(key).map(|v| is_truthy(&v)).unwrap_or(default);

        Self::new(DisplayPreference::from_lookup(&lookup))
            .with_hide_secondary(flag("HIDE_SECONDARY", false))
            .with_show_fiat_in_testnets(flag("SHOW_FIAT_IN_TESTNETS", false))
            .with_use_currency_rate_check(flag("USE_CURRENCY_RATE_CHECK", true))
    }

    /// The fiat currency these prefs allow for `asset`, price aside.
    ///
    /// Fiat is only offered when it is enabled, rate checks are on, the chain is
    /// a mainnet (or testnet pricing is allowed) and the ticker is the chain's own.
    pub fn fiat_for(&self, asset: &NativeAsset) -> Option<FiatCurrency> {
        let fiat = self.display_preference.fiat()?;
        if !self.use_currency_rate_check
            || (asset.is_testnet() && !self.show_fiat_in_testnets)
            || !asset.is_original_ticker()
        {
            return None;
        }
        Some(fiat)
    }

    /// The rate the input may use for `asset`: unavailable unless
    /// [`Self::fiat_for`] allows fiat and the price map has a non-zero price.
    pub fn effective_rate(&self, asset: &NativeAsset, prices: &PriceMap) -> ExchangeRate {
        self.fiat_for(asset)
            .map(|fiat| prices.rate_for(fiat))
            .unwrap_or_default()
    }

    pub fn input_options(&self, asset: &NativeAsset) -> InputOptions {
        InputOptions {
            show_secondary: !self.hide_secondary,
            fiat_enabled: self.fiat_for(asset).is_some(),
            ..InputOptions::default()
        }
    }

    /// Assembles the conversion context for the amount input.
    pub fn conversion(&self, asset: &NativeAsset, prices: &PriceMap) -> Conversion {
        Conversion::new(
            asset.clone(),
            self.display_preference.fiat().unwrap_or_default(),
            self.effective_rate(asset, prices),
        )
        .with_options(self.input_options(asset))
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseUnitAmount;
    use crate::Denomination;
    use crate::DenominationController;

    fn usd_prefs() -> UserPrefs {
        UserPrefs::new(DisplayPreference::FiatEnabled {
            fiat: FiatCurrency::USD,
            display_as_fiat: false,
        })
    }

    fn prices() -> PriceMap {
        "USD:231.06".parse().unwrap()
    }

    #[test]
    fn mainnet_with_price_has_a_rate() {
        let rate = usd_prefs().effective_rate(&NativeAsset::default(), &prices());
        assert_eq!(rate, "231.06".parse().unwrap());
    }

    #[test]
    fn native_only_has_no_rate() {
        let prefs = UserPrefs::new(DisplayPreference::NativeOnly);
        assert!(prefs.effective_rate(&NativeAsset::default(), &prices()).is_unavailable());
    }

    #[test]
    fn testnet_needs_opt_in() {
        let testnet = NativeAsset::default().with_testnet(true);
        assert!(usd_prefs().effective_rate(&testnet, &prices()).is_unavailable());
        assert!(usd_prefs()
            .with_show_fiat_in_testnets(true)
            .effective_rate(&testnet, &prices())
            .is_known());
    }

    #[test]
    fn disabled_rate_check_or_renamed_ticker_hides_fiat() {
        assert!(usd_prefs()
            .with_use_currency_rate_check(false)
            .effective_rate(&NativeAsset::default(), &prices())
            .is_unavailable());

        let renamed = NativeAsset::default().with_original_ticker(false);
        assert!(usd_prefs().effective_rate(&renamed, &prices()).is_unavailable());
    }

    #[test]
    fn missing_price_is_unavailable() {
        let prefs = UserPrefs::new(DisplayPreference::FiatEnabled {
            fiat: FiatCurrency::EUR,
            display_as_fiat: true,
        });
        assert!(prefs.effective_rate(&NativeAsset::default(), &prices()).is_unavailable());
    }

    #[test]
    fn hide_secondary_flows_into_options() {
        let conversion = usd_prefs()
            .with_hide_secondary(true)
            .conversion(&NativeAsset::default(), &prices());
        assert!(!conversion.options.show_secondary);
        assert_eq!(conversion.fiat, FiatCurrency::USD);
    }

    #[test]
    fn testnet_fiat_preference_falls_back_to_native() {
        let prefs = UserPrefs::new(DisplayPreference::FiatEnabled {
            fiat: FiatCurrency::USD,
            display_as_fiat: true,
        });
        let testnet = NativeAsset::default().with_testnet(true);
        let conversion = prefs.conversion(&testnet, &prices());
        assert!(!conversion.options.fiat_enabled);

        let mut controller = DenominationController::new(
            conversion,
            BaseUnitAmount::zero(),
            prefs.display_preference().preferred_denomination(),
        );
        assert!(controller.primary().is_native());
        assert_eq!(controller.view().editable, "0");
        assert_eq!(controller.secondary(), None);
        assert!(controller.edit("1").is_ok());
        assert_eq!(controller.swap(), Denomination::Native);
    }

    #[test]
    fn mainnet_without_price_still_allows_fiat() {
        let conversion = usd_prefs().conversion(&NativeAsset::default(), &PriceMap::new());
        assert!(conversion.options.fiat_enabled);
        assert!(conversion.rate.is_unavailable());
    }

    #[test]
    fn reads_flags_from_lookup() {
        let prefs = UserPrefs::from_lookup(|key| match key {
            "HIDE_SECONDARY" => Some("true".to_string()),
            "USE_CURRENCY_RATE_CHECK" => Some("false".to_string()),
            _ => None,
        });
        assert!(prefs.hide_secondary());
        assert!(!prefs.use_currency_rate_check);
        assert!(!prefs.show_fiat_in_testnets);
    }

    #[test]
    fn round_trips_through_json() {
        let prefs = usd_prefs().with_hide_secondary(true);
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(serde_json::from_str::<UserPrefs>(&json).unwrap(), prefs);
    }
}
