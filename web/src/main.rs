//! Launches the amount input in the browser, or in a desktop window when built
//! with the `desktop` feature.

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("fiat is priced from FIAT_PRICES, e.g. USD:231.06");
    dioxus::launch(ui::App);
}
