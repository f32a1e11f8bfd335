// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod components;

use api::native_asset::NativeAsset;
use api::prefs::user_prefs::UserPrefs;
use api::price_map::PriceMap;
use api::BaseUnitAmount;
use api::Denomination;
use app_state_mut::AppStateMut;
pub use components::currency_input::CurrencyInput;

#[component]
pub fn App() -> Element {
    let user_prefs = use_signal(UserPrefs::from_env);
    let prices = use_signal(PriceMap::from_env);
    let native_asset = use_signal(NativeAsset::from_env);

    dioxus_logger::tracing::info!("prefs: {:#?}", *user_prefs.peek());

    use_context_provider(|| AppStateMut {
        prices,
        user_prefs,
        native_asset,
    });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        main {
            class: "container",
            AmountOwner {}
        }
    }
}

/// Owns the amount being edited and feeds it back into the input.
#[component]
fn AmountOwner() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut amount = use_signal(String::new);

    let fiat_preferred = app_state_mut
        .user_prefs
        .read()
        .display_preference()
        .preferred_denomination()
        .is_fiat();
    let (encoding, ticker) = {
        let asset = app_state_mut.native_asset.read();
        (asset.encoding(), asset.ticker().to_string())
    };
    let base_units = BaseUnitAmount::from_canonical_str(&amount.read(), encoding).unwrap_or_default();
    let unit_price = app_state_mut
        .user_prefs
        .read()
        .conversion(&app_state_mut.native_asset.read(), &app_state_mut.prices.read())
        .unit_price()
        .map(|price| (price.currency().name(), price.to_string_with_code()));

    rsx! {
        article {
            header { "Amount" }
            CurrencyInput {
                value: amount(),
                is_fiat_preferred: fiat_preferred,
                placeholder: "0",
                on_change: move |value: String| amount.set(value),
                on_preference_toggle: move |fiat: bool| {
                    app_state_mut
                        .user_prefs
                        .write()
                        .display_preference_mut()
                        .set_preferred_denomination(Denomination::from_fiat_preferred(fiat));
                },
            }
            footer {
                small { "Base units: {base_units}" }
                if let Some((currency_name, price)) = unit_price {
                    br {}
                    small {
                        title: "{currency_name}",
                        "1 {ticker} = {price}"
                    }
                }
            }
        }
    }
}
