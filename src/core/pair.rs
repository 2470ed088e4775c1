//! Currency pairs and the default watch list

use crate::core::currency::Currency;
use crate::core::error::StrengthError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    pub fn new(base: Currency, quote: Currency) -> Result<Self, StrengthError> {
        if base == quote {
            return Err(StrengthError::InvalidPair(format!("{base}{quote}")));
        }
        Ok(Self { base, quote })
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = StrengthError;

    /// Splits into base (first 3 characters) and quote (the rest).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = |code: &str| StrengthError::UnknownCurrency {
            code: code.to_string(),
            context: format!("pair {s}"),
        };

        let (base, quote) = match (s.get(..3), s.get(3..)) {
            (Some(base), Some(quote)) => (base, quote),
            _ => return Err(unknown(s)),
        };
        let base = base.parse::<Currency>().map_err(|_| unknown(base))?;
        let quote = quote.parse::<Currency>().map_err(|_| unknown(quote))?;
        CurrencyPair::new(base, quote)
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = StrengthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> String {
        pair.to_string()
    }
}

const DEFAULT_PAIR_CODES: [&str; 37] = [
    "AUDCAD", "AUDCHF", "AUDJPY", "AUDNZD", "AUDUSD", "CADCHF", "CADJPY", "CHFJPY", "EURAUD",
    "EURCAD", "EURCHF", "EURGBP", "EURJPY", "EURNZD", "EURNOK", "EURSEK", "EURUSD", "GBPAUD",
    "GBPCAD", "GBPCHF", "GBPJPY", "GBPNZD", "GBPNOK", "GBPSEK", "GBPUSD", "NZDCAD", "NZDCHF",
    "NZDJPY", "NZDUSD", "NOKJPY", "NOKSEK", "SEKJPY", "USDCAD", "USDCHF", "USDJPY", "USDNOK",
    "USDSEK",
];

/// The default watch list, in display order.
pub fn default_pairs() -> Vec<CurrencyPair> {
    DEFAULT_PAIR_CODES
        .iter()
        .filter_map(|code| code.parse().ok())
        .collect()
}
