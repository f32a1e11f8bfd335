//! Defines the mutable, reactive state for the application's UI.

use api::native_asset::NativeAsset;
use api::prefs::user_prefs::UserPrefs;
use api::price_map::PriceMap;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The amount input reads its conversion context from here and re-renders
/// whenever a price, preference or the active asset changes.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The latest fiat prices of one display unit. Empty while unknown.
    pub prices: Signal<PriceMap>,
    /// The user's display and fiat-policy preferences.
    pub user_prefs: Signal<UserPrefs>,
    /// The active chain's native asset.
    pub native_asset: Signal<NativeAsset>,
}
