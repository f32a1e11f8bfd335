// ui/src/components/currency_input.rs
use api::BaseUnitAmount;
use api::Denomination;
use api::DenominationController;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::app_state_mut::AppStateMut;
use crate::components::amount_field::AmountField;

const MAX_INTEGER_DIGITS: usize = 30;

/// The dual-denomination amount input.
///
/// `value` is the owner's canonical base-unit string and stays the source of
/// truth: the component only reports new values through `on_change`, and a
/// click on the swap control through `on_preference_toggle` (with `true` when
/// fiat became primary).
#[component]
pub fn CurrencyInput(
    #[props(default)] value: String,
    on_change: Option<EventHandler<String>>,
    #[props(default)] is_fiat_preferred: bool,
    on_preference_toggle: Option<EventHandler<bool>>,
    #[props(default)] placeholder: String,
) -> Element {
    let app_state_mut = use_context::<AppStateMut>();

    let initial_value = value.clone();
    let mut controller = use_signal(move || {
        let conversion = app_state_mut.user_prefs.peek().conversion(
            &app_state_mut.native_asset.peek(),
            &app_state_mut.prices.peek(),
        );
        let amount = BaseUnitAmount::from_canonical_str(&initial_value, conversion.asset.encoding())
            .unwrap_or_default();
        DenominationController::new(
            conversion,
            amount,
            Denomination::from_fiat_preferred(is_fiat_preferred),
        )
    });

    // Rates, prefs and asset come from context.
    use_effect(move || {
        let conversion = app_state_mut.user_prefs.read().conversion(
            &app_state_mut.native_asset.read(),
            &app_state_mut.prices.read(),
        );
        controller.write().set_conversion(conversion);
    });

    // The owner's amount and preferred denomination come from props.
    use_effect(use_reactive!(|(value, is_fiat_preferred)| {
        let encoding = controller.peek().conversion().asset.encoding();
        match BaseUnitAmount::from_canonical_str(&value, encoding) {
            Ok(amount) => controller.write().external_update(amount),
            Err(e) => warn!("ignoring invalid amount {:?}: {}", value, e),
        }
        controller
            .write()
            .set_primary(Denomination::from_fiat_preferred(is_fiat_preferred));
    }));

    let view = controller.read().view();
    let secondary = view.secondary.clone();
    let max_decimals = {
        let ctl = controller.read();
        match view.primary {
            Denomination::Native => ctl.conversion().asset.decimals() as usize,
            Denomination::Fiat => ctl.conversion().fiat.decimals() as usize,
        }
    };

    let handle_input = move |text: String| {
        let emitted = {
            let mut ctl = controller.write();
            ctl.edit(&text)
                .ok()
                .map(|amount| ctl.conversion().asset.canonical_string(&amount))
        };
        if let (Some(emitted), Some(on_change)) = (emitted, on_change) {
            on_change.call(emitted);
        }
    };

    let handle_swap = move |_: MouseEvent| {
        let (before, after) = {
            let mut ctl = controller.write();
            (ctl.primary(), ctl.swap())
        };
        if before == after {
            return;
        }
        if let Some(on_preference_toggle) = on_preference_toggle {
            on_preference_toggle.call(after.is_fiat());
        }
    };

    rsx! {
        div {
            class: "currency-input",
            div {
                style: "display: flex; gap: 0.5rem; align-items: center;",
                div {
                    style: "flex-grow: 1; display: flex;",
                    AmountField {
                        value: view.editable.clone(),
                        on_input: handle_input,
                        max_integers: MAX_INTEGER_DIGITS,
                        max_decimals,
                        invalid: !view.valid,
                        placeholder,
                    }
                }
                span {
                    class: "currency-input__suffix",
                    "{view.suffix}"
                }
                if view.can_swap {
                    button {
                        r#type: "button",
                        class: "secondary outline",
                        style: "width: 3rem; margin-bottom: 0; flex-shrink: 0;",
                        title: "Swap currency",
                        "data-testid": "currency-swap",
                        onclick: handle_swap,
                        "⇅"
                    }
                }
            }
            if let Some(secondary) = secondary {
                small {
                    class: "currency-input__secondary",
                    title: "{secondary.text}",
                    "{secondary.text}"
                }
            }
        }
    }
}
