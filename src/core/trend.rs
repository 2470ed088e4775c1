//! Classifies currency pairs as bullish, bearish or neutral from score differentials.
use crate::core::currency::Currency;
use crate::core::error::StrengthError;
use crate::core::pair::CurrencyPair;
use crate::core::scorer::AggregateScores;
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

/// Score difference at or below which a pair is considered flat.
pub const DEFAULT_NEUTRAL_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrendLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TrendLabel::Bullish => "Bullish",
                TrendLabel::Bearish => "Bearish",
                TrendLabel::Neutral => "Neutral",
            }
        )
    }
}

impl TrendLabel {
    /// `|diff| <= threshold` is Neutral, so a difference of exactly the
    /// threshold is never directional.
    pub fn from_diff(diff: f64, threshold: f64) -> Self {
        if diff.abs() <= threshold {
            TrendLabel::Neutral
        } else if diff > threshold {
            TrendLabel::Bullish
        } else {
            TrendLabel::Bearish
        }
    }
}

/// Pairs partitioned by trend, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendGroups {
    pub bullish: Vec<CurrencyPair>,
    pub bearish: Vec<CurrencyPair>,
    pub neutral: Vec<CurrencyPair>,
}

impl TrendGroups {
    pub fn get(&self, label: TrendLabel) -> &[CurrencyPair] {
        match label {
            TrendLabel::Bullish => &self.bullish,
            TrendLabel::Bearish => &self.bearish,
            TrendLabel::Neutral => &self.neutral,
        }
    }

    pub fn len(&self) -> usize {
        self.bullish.len() + self.bearish.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn score_of(
    scores: &AggregateScores,
    currency: Currency,
    pair: &CurrencyPair,
) -> Result<f64, StrengthError> {
    scores
        .get(currency)
        .ok_or_else(|| StrengthError::UnknownCurrency {
            code: currency.to_string(),
            context: format!("scores for pair {pair}"),
        })
}

/// Labels a single pair from the base minus quote score difference.
pub fn classify_pair(
    scores: &AggregateScores,
    pair: &CurrencyPair,
    threshold: f64,
) -> Result<TrendLabel, StrengthError> {
    let diff = score_of(scores, pair.base, pair)? - score_of(scores, pair.quote, pair)?;
    let label = TrendLabel::from_diff(diff, threshold);
    debug!("{pair}: diff {diff} -> {label}");
    Ok(label)
}

/// Stable partition of `pairs` into bullish, bearish and neutral lists.
///
/// Fails on the first pair whose base or quote has no entry in `scores`;
/// no partial result is returned.
pub fn classify_pairs(
    scores: &AggregateScores,
    pairs: &[CurrencyPair],
    threshold: f64,
) -> Result<TrendGroups, StrengthError> {
    let mut groups = TrendGroups::default();
    for pair in pairs {
        match classify_pair(scores, pair, threshold)? {
            TrendLabel::Bullish => groups.bullish.push(*pair),
            TrendLabel::Bearish => groups.bearish.push(*pair),
            TrendLabel::Neutral => groups.neutral.push(*pair),
        }
    }
    Ok(groups)
}
