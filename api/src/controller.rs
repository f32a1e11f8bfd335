//! The primary/secondary denomination state machine behind the amount input.
//!
//! [`Conversion`] holds the pure mapping from (amount, denomination) to text.
//! [`DenominationController`] layers the edit, swap and external-update
//! transitions on top of it. The caller owns the amount; the controller only
//! returns new amounts and never emits anything itself.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use thiserror::Error;

use crate::base_unit_amount::BaseUnitAmount;
use crate::denomination::Denomination;
use crate::display_unit;
use crate::exact_decimal::ExactDecimal;
use crate::exact_decimal::ParseAmountError;
use crate::exchange_rate::ExchangeRate;
use crate::fiat_amount::FiatAmount;
use crate::fiat_amount::ParseFiatAmountError;
use crate::fiat_conversion;
use crate::fiat_conversion::ConversionError;
use crate::fiat_conversion::DEFAULT_FIAT_INPUT_DECIMALS;
use crate::fiat_currency::FiatCurrency;
use crate::input_formatter;
use crate::native_asset::NativeAsset;

/// Why an edit produced no amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error(transparent)]
    Parse(#[from] ParseAmountError),
    #[error(transparent)]
    FiatAmount(#[from] ParseFiatAmountError),
    #[error("fiat amounts cannot be entered while the exchange rate is unavailable")]
    RateUnavailable,
}

impl From<ConversionError> for EditError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::RateUnavailable => Self::RateUnavailable,
            ConversionError::Parse(e) => Self::Parse(e),
            ConversionError::FiatAmount(e) => Self::FiatAmount(e),
        }
    }
}

/// Precision and visibility knobs for the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// When false the secondary value is neither derived nor shown.
    pub show_secondary: bool,
    /// When false fiat can never be offered for this asset, whatever the rate.
    pub fiat_enabled: bool,
    /// Fraction digits of the editable native text.
    pub native_primary_decimals: u32,
    /// Fraction digits of the read-only native display.
    pub native_secondary_decimals: u32,
    /// Fraction digits kept when a fiat entry is turned into display units.
    pub fiat_input_decimals: u32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            show_secondary: true,
            fiat_enabled: true,
            native_primary_decimals: 8,
            native_secondary_decimals: 6,
            fiat_input_decimals: DEFAULT_FIAT_INPUT_DECIMALS,
        }
    }
}

/// A formatted, read-only value tagged with its denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAmount {
    pub denomination: Denomination,
    /// Text with its unit, e.g. "$231.06" or "0.004328 ETH".
    pub text: String,
}

/// Everything a renderer needs for one frame of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyView {
    pub primary: Denomination,
    /// Contents of the editable field.
    pub editable: String,
    /// Unit label next to the editable field ("ETH", "USD").
    pub suffix: String,
    pub valid: bool,
    pub secondary: Option<DisplayAmount>,
    /// Whether the swap control is offered at all.
    pub can_swap: bool,
}

/// The pure conversion context: asset, fiat currency, rate and options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversion {
    pub asset: NativeAsset,
    pub fiat: FiatCurrency,
    pub rate: ExchangeRate,
    pub options: InputOptions,
}

impl Conversion {
    pub fn new(asset: NativeAsset, fiat: FiatCurrency, rate: ExchangeRate) -> Self {
        Self {
            asset,
            fiat,
            rate,
            options: InputOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InputOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether fiat may ever be the primary denomination.
    ///
    /// A hidden secondary also rules fiat out: the user would type fiat
    /// without seeing what it buys.
    pub fn allows_fiat(&self) -> bool {
        self.options.fiat_enabled && self.options.show_secondary
    }

    /// `requested`, or native when fiat is ruled out.
    pub fn usable_primary(&self, requested: Denomination) -> Denomination {
        if self.allows_fiat() {
            requested
        } else {
            Denomination::Native
        }
    }

    /// Fiat price of one display unit, if a rate is known.
    pub fn unit_price(&self) -> Option<FiatAmount> {
        fiat_conversion::to_fiat(&ExactDecimal::from_integer(1u32), &self.rate, self.fiat).ok()
    }

    /// Editable text for `amount` in `denomination`, without unit.
    ///
    /// `None` for fiat while the rate is unavailable.
    pub fn editable_text(&self, amount: &BaseUnitAmount, denomination: Denomination) -> Option<String> {
        match denomination {
            Denomination::Native => Some(display_unit::to_display(
                amount,
                self.asset.decimals(),
                self.options.native_primary_decimals,
            )),
            Denomination::Fiat => fiat_conversion::amount_to_fiat(
                amount,
                self.asset.decimals(),
                &self.rate,
                self.fiat,
            )
            .ok()
            .map(|fiat| fiat.to_string()),
        }
    }

    /// The read-only value shown next to a `primary` field.
    ///
    /// `None` when the secondary is hidden, or when it is fiat and no rate is known.
    pub fn secondary_display(&self, amount: &BaseUnitAmount, primary: Denomination) -> Option<DisplayAmount> {
        if !self.options.show_secondary {
            return None;
        }

        let denomination = primary.toggled();
        let text = match denomination {
            Denomination::Native => self.asset.format_amount(&display_unit::to_display(
                amount,
                self.asset.decimals(),
                self.options.native_secondary_decimals,
            )),
            Denomination::Fiat => fiat_conversion::amount_to_fiat(
                amount,
                self.asset.decimals(),
                &self.rate,
                self.fiat,
            )
            .ok()?
            .to_string_with_symbol(),
        };

        Some(DisplayAmount { denomination, text })
    }

    /// Resolves a typed value in `denomination` to base units.
    ///
    /// Fiat values may not be finer than the currency's minor unit.
    pub fn amount_from_input(
        &self,
        value: &ExactDecimal,
        denomination: Denomination,
    ) -> Result<BaseUnitAmount, ConversionError> {
        match denomination {
            Denomination::Native => Ok(display_unit::from_display_decimal(value, self.asset.decimals())),
            Denomination::Fiat => fiat_conversion::fiat_to_amount(
                &FiatAmount::new_from_decimal(value, self.fiat)?.to_decimal(),
                &self.rate,
                self.asset.decimals(),
                self.options.fiat_input_decimals,
            ),
        }
    }

    pub fn suffix(&self, denomination: Denomination) -> &str {
        match denomination {
            Denomination::Native => self.asset.ticker(),
            Denomination::Fiat => self.fiat.code(),
        }
    }

    /// Renders a settled amount: both strings derived from `amount` alone.
    pub fn render(&self, amount: &BaseUnitAmount, primary: Denomination) -> CurrencyView {
        CurrencyView {
            primary,
            editable: self.editable_text(amount, primary).unwrap_or_default(),
            suffix: self.suffix(primary).to_string(),
            valid: true,
            secondary: self.secondary_display(amount, primary),
            can_swap: self.allows_fiat(),
        }
    }
}

/// The text buffer of the editable field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub text: String,
    pub valid: bool,
}

impl InputState {
    fn settled(text: String) -> Self {
        Self { text, valid: true }
    }
}

/// Turns edits in the primary denomination into base-unit amounts and keeps
/// the displayed strings derived from the latest amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationController {
    conversion: Conversion,
    primary: Denomination,
    amount: BaseUnitAmount,
    input: InputState,
    last_edit: Option<BaseUnitAmount>,
}

impl DenominationController {
    /// `primary` falls back to native when the conversion rules fiat out.
    pub fn new(conversion: Conversion, amount: BaseUnitAmount, primary: Denomination) -> Self {
        let primary = conversion.usable_primary(primary);
        let text = conversion.editable_text(&amount, primary).unwrap_or_default();
        Self {
            conversion,
            primary,
            amount,
            input: InputState::settled(text),
            last_edit: None,
        }
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    pub fn primary(&self) -> Denomination {
        self.primary
    }

    /// The latest amount received from the owner or produced by an edit.
    pub fn amount(&self) -> &BaseUnitAmount {
        &self.amount
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Applies the field's new text.
    ///
    /// On success the new amount is returned for the caller to hand to the
    /// owner. On failure the previous amount is kept and the input is marked
    /// invalid.
    pub fn edit(&mut self, text: &str) -> Result<BaseUnitAmount, EditError> {
        self.input.text = text.to_string();

        let result = input_formatter::parse(text)
            .map_err(EditError::from)
            .and_then(|value| {
                self.conversion
                    .amount_from_input(&value, self.primary)
                    .map_err(EditError::from)
            });

        match result {
            Ok(amount) => {
                debug!("{:?} edit {:?} resolved to {} base units", self.primary, text, amount);
                self.input.valid = true;
                self.amount = amount.clone();
                self.last_edit = Some(amount.clone());
                Ok(amount)
            }
            Err(err) => {
                warn!("rejected {:?} edit {:?}: {}", self.primary, text, err);
                self.input.valid = false;
                Err(err)
            }
        }
    }

    /// Flips the primary denomination and returns the new one.
    ///
    /// The amount is untouched; the editable text is re-derived from it.
    /// Without fiat there is nothing to swap to and native stays primary.
    pub fn swap(&mut self) -> Denomination {
        let primary = self.conversion.usable_primary(self.primary.toggled());
        if primary == self.primary {
            return self.primary;
        }
        self.primary = primary;
        debug!("swapped primary denomination to {:?}", self.primary);
        self.settle();
        self.primary
    }

    /// Sets the primary denomination from outside (e.g. a stored preference).
    pub fn set_primary(&mut self, primary: Denomination) {
        if self.primary != self.conversion.usable_primary(primary) {
            self.swap();
        }
    }

    /// Takes a new amount from the owner.
    ///
    /// When the owner echoes back the amount of the latest edit, the typed
    /// text (e.g. "1.") is kept as is.
    pub fn external_update(&mut self, amount: BaseUnitAmount) {
        let echoes_edit = self.input.valid && self.last_edit.as_ref() == Some(&amount);
        self.amount = amount;
        if !echoes_edit {
            self.settle();
        }
    }

    pub fn set_exchange_rate(&mut self, rate: ExchangeRate) {
        if self.conversion.rate != rate {
            self.conversion.rate = rate;
            self.refresh_fiat_text();
        }
    }

    pub fn set_conversion(&mut self, conversion: Conversion) {
        if self.conversion == conversion {
            return;
        }
        self.conversion = conversion;
        let primary = self.conversion.usable_primary(self.primary);
        if primary != self.primary {
            debug!("fiat ruled out, falling back to {:?}", primary);
            self.primary = primary;
            self.settle();
        } else {
            self.refresh_fiat_text();
        }
    }

    /// The derived secondary value, blank while the input is invalid.
    pub fn secondary(&self) -> Option<DisplayAmount> {
        if !self.input.valid {
            return None;
        }
        self.conversion.secondary_display(&self.amount, self.primary)
    }

    /// The settled rendering of the amount, overlaid with what the user typed.
    pub fn view(&self) -> CurrencyView {
        let mut view = self.conversion.render(&self.amount, self.primary);
        view.editable = self.input.text.clone();
        view.valid = self.input.valid;
        if !view.valid {
            view.secondary = None;
        }
        view
    }

    fn settle(&mut self) {
        let text = self
            .conversion
            .editable_text(&self.amount, self.primary)
            .unwrap_or_default();
        self.input = InputState::settled(text);
        self.last_edit = None;
    }

    // A fiat field's text depends on the rate; a native field's does not.
    fn refresh_fiat_text(&mut self) {
        if self.primary.is_fiat() {
            self.settle();
        }
    }
}
