//! Errors raised by the scoring and classification engine

use crate::core::currency::Currency;
use crate::core::indicator::Indicator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrengthError {
    #[error("Unknown currency '{code}' in {context}")]
    UnknownCurrency { code: String, context: String },

    #[error("Invalid currency pair {0}: base and quote must differ")]
    InvalidPair(String),

    #[error("Invalid score for {currency} {indicator}: {value}")]
    InvalidScore {
        currency: Currency,
        indicator: Indicator,
        value: f64,
    },

    #[error("Invalid neutrality threshold: {0}")]
    InvalidThreshold(f64),
}
