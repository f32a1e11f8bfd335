use serde::Deserialize;
use serde::Serialize;

/// Which unit an amount is typed or shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum Denomination {
    /// The chain's native asset, in its display unit.
    #[default]
    Native,
    /// The user's fiat currency.
    Fiat,
}

impl Denomination {
    pub fn toggled(self) -> Self {
        match self {
            Self::Native => Self::Fiat,
            Self::Fiat => Self::Native,
        }
    }

    pub fn from_fiat_preferred(fiat_preferred: bool) -> Self {
        if fiat_preferred {
            Self::Fiat
        } else {
            Self::Native
        }
    }
}
