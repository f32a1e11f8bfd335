// ui/src/components/amount_field.rs
use api::input_formatter;
use dioxus::prelude::*;

/// A plain decimal text field.
///
/// Every keystroke is passed through [`input_formatter::sanitize`] before it
/// reaches `on_input`, so the parent only ever sees digits and at most one `.`.
#[component]
pub fn AmountField(
    value: String,
    on_input: EventHandler<String>,
    max_integers: usize,
    max_decimals: usize,
    #[props(default)] invalid: bool,
    #[props(default)] placeholder: String,
) -> Element {
    let is_numerically_zero = !value.trim().is_empty()
        && input_formatter::parse(&value)
            .map(|v| v.is_zero())
            .unwrap_or(false);

    // A zero amount is cleared on focus so typing replaces it.
    let handle_focus = move |_: FocusEvent| {
        if is_numerically_zero {
            on_input.call(String::new());
        }
    };

    let focus_css = r#"
        input.hide-placeholder-focus:focus::placeholder {
            color: transparent;
            opacity: 0;
        }
    "#;

    rsx! {
        style { "{focus_css}" }
        input {
            r#type: "text",
            class: "pico-input hide-placeholder-focus",
            style: "margin-bottom: 0; width: 100%;",
            inputmode: "decimal",
            autocomplete: "off",
            "data-testid": "currency-input",
            "aria-invalid": if invalid { "true" } else { "false" },
            placeholder: "{placeholder}",
            value: "{value}",
            onfocus: handle_focus,
            oninput: move |event| {
                on_input.call(input_formatter::sanitize(&event.value(), max_integers, max_decimals))
            },
        }
    }
}
