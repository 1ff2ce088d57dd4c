use serde::{Deserialize, Serialize};

/// Currencies a plan can be priced in or displayed as.
///
/// Declaration order is the order the currency selector lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Gbp,
    Usd,
    Eur,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Gbp,
        Currency::Usd,
        Currency::Eur,
        Currency::Aud,
        Currency::Cad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Usd | Currency::Aud | Currency::Cad => "$",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown currency: {}", s))
    }
}

/// Currency prices are shown in.
///
/// `Original` leaves every figure in its plan's native currency, unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayCurrency {
    Original,
    Converted(Currency),
}

impl DisplayCurrency {
    /// Conversion target, if any.
    pub fn target(&self) -> Option<Currency> {
        match self {
            DisplayCurrency::Original => None,
            DisplayCurrency::Converted(c) => Some(*c),
        }
    }

    /// Currency a figure for a plan priced in `native` ends up in.
    pub fn resolve(&self, native: Currency) -> Currency {
        self.target().unwrap_or(native)
    }
}

impl Default for DisplayCurrency {
    fn default() -> Self {
        DisplayCurrency::Converted(Currency::Gbp)
    }
}

impl From<Currency> for DisplayCurrency {
    fn from(currency: Currency) -> Self {
        DisplayCurrency::Converted(currency)
    }
}

impl std::fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayCurrency::Original => write!(f, "original"),
            DisplayCurrency::Converted(c) => write!(f, "{}", c),
        }
    }
}

impl std::str::FromStr for DisplayCurrency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "original" | "none" => Ok(DisplayCurrency::Original),
            other => other.parse().map(DisplayCurrency::Converted),
        }
    }
}

impl TryFrom<String> for DisplayCurrency {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayCurrency> for String {
    fn from(value: DisplayCurrency) -> Self {
        value.to_string()
    }
}
