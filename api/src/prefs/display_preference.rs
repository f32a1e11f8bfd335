use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::denomination::Denomination;
use crate::fiat_currency::FiatCurrency;

/// Represents the user's complete currency display preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum DisplayPreference {
    /// Native-asset-only mode. No fiat value is derived or shown.
    NativeOnly,

    /// Fiat integration is enabled.
    FiatEnabled {
        /// The specific fiat currency selected by the user.
        fiat: FiatCurrency,

        /// `true` to type amounts in fiat by default, `false` for the native asset.
        display_as_fiat: bool,
    },
}

impl DisplayPreference {
    /// Creates a DisplayPreference instance from environment variables,
    /// with a conservative in-code default.
    ///
    /// # Environment Variables (case-insensitive for "true" or "false"):
    /// - `NATIVE_ONLY`: if "true", forces native-only mode. Defaults to false.
    /// - `FIAT_CURRENCY`: an ISO code such as "USD" or "EUR".
    /// - `DISPLAY_AS_FIAT`: "true" to make fiat the primary denomination.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        /// Lowest priority setting: the mode used when `NATIVE_ONLY` is unset.
        const NATIVE_ONLY: bool = false;

        let is_native_mode = lookup("NATIVE_ONLY")
            .map(|val| is_truthy(&val))
            .unwrap_or(NATIVE_ONLY);

        if is_native_mode {
            return Self::NativeOnly;
        }

        let fiat = lookup("FIAT_CURRENCY")
            .and_then(|s| FiatCurrency::from_str(s.trim()).ok())
            .unwrap_or_default();

        let display_as_fiat = lookup("DISPLAY_AS_FIAT")
            .map(|val| is_truthy(&val))
            .unwrap_or(false);

        Self::FiatEnabled {
            fiat,
            display_as_fiat,
        }
    }

    /// The selected fiat currency, if fiat is enabled at all.
    pub fn fiat(&self) -> Option<FiatCurrency> {
        match self {
            Self::NativeOnly => None,
            Self::FiatEnabled { fiat, .. } => Some(*fiat),
        }
    }

    /// The denomination the input starts in.
    pub fn preferred_denomination(&self) -> Denomination {
        match self {
            Self::FiatEnabled {
                display_as_fiat: true,
                ..
            } => Denomination::Fiat,
            _ => Denomination::Native,
        }
    }

    /// Records a swap so the next input starts in `primary`.
    pub fn set_preferred_denomination(&mut self, primary: Denomination) {
        if let Self::FiatEnabled {
            display_as_fiat, ..
        } = self
        {
            *display_as_fiat = primary.is_fiat();
        }
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}

pub(crate) fn is_truthy(val: &str) -> bool {
    val.trim().eq_ignore_ascii_case("true") || val.trim() == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_usd_with_native_primary() {
        let pref = DisplayPreference::from_lookup(|_| None);
        assert_eq!(
            pref,
            DisplayPreference::FiatEnabled {
                fiat: FiatCurrency::USD,
                display_as_fiat: false,
            }
        );
        assert!(pref.preferred_denomination().is_native());
    }

    #[test]
    fn native_only_wins() {
        let pref = DisplayPreference::from_lookup(|key| match key {
            "NATIVE_ONLY" => Some("TRUE".to_string()),
            "DISPLAY_AS_FIAT" => Some("true".to_string()),
            _ => None,
        });
        assert!(pref.is_native_only());
        assert_eq!(pref.fiat(), None);
        assert!(pref.preferred_denomination().is_native());
    }

    #[test]
    fn reads_fiat_settings() {
        let pref = DisplayPreference::from_lookup(|key| match key {
            "FIAT_CURRENCY" => Some("eur".to_string()),
            "DISPLAY_AS_FIAT" => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(pref.fiat(), Some(FiatCurrency::EUR));
        assert!(pref.preferred_denomination().is_fiat());
    }

    #[test]
    fn swap_updates_preference() {
        let mut pref = DisplayPreference::FiatEnabled {
            fiat: FiatCurrency::USD,
            display_as_fiat: false,
        };
        pref.set_preferred_denomination(Denomination::Fiat);
        assert!(pref.preferred_denomination().is_fiat());

        let mut native = DisplayPreference::NativeOnly;
        native.set_preferred_denomination(Denomination::Fiat);
        assert!(native.is_native_only());
    }
}
