//! The price of one display unit in a fiat currency.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::exact_decimal::ExactDecimal;
use crate::exact_decimal::ParseAmountError;

/// Fiat value of one display unit (e.g. `231.06` for 1 ETH = $231.06), or the
/// state of not knowing it.
///
/// Construct through [`ExchangeRate::new`] so a zero rate becomes
/// `Unavailable`; [`ExchangeRate::known`] never yields zero either way.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum ExchangeRate {
    #[default]
    Unavailable,
    Known(ExactDecimal),
}

impl ExchangeRate {
    pub fn new(rate: ExactDecimal) -> Self {
        if rate.is_zero() {
            Self::Unavailable
        } else {
            Self::Known(rate)
        }
    }

    /// The positive rate, if there is one.
    pub fn known(&self) -> Option<&ExactDecimal> {
        match self {
            Self::Known(rate) if !rate.is_zero() => Some(rate),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.known().is_some()
    }
}

impl FromStr for ExchangeRate {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_unavailable() {
        assert_eq!(ExchangeRate::new(ExactDecimal::zero()), ExchangeRate::Unavailable);
        assert_eq!("0.00".parse(), Ok(ExchangeRate::Unavailable));
        assert!(!ExchangeRate::Known(ExactDecimal::zero()).is_available());
    }

    #[test]
    fn keeps_exact_value() {
        let rate = ExchangeRate::new("231.060".parse().unwrap());
        assert_eq!(rate.known(), Some(&"231.06".parse().unwrap()));
        assert_eq!(" 231.06 ".parse::<ExchangeRate>(), Ok(rate));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!("abc".parse::<ExchangeRate>().is_err());
        assert!("-1".parse::<ExchangeRate>().is_err());
    }
}
