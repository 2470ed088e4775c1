//! Runs one full scoring and classification pass over a snapshot of raw scores.
use crate::core::currency::Currency;
use crate::core::error::StrengthError;
use crate::core::pair::CurrencyPair;
use crate::core::scorer::{self, AggregateScores, RankedEntry, RawScores};
use crate::core::trend::{self, TrendGroups};
use serde::Serialize;
use tracing::debug;

/// Everything the display layer needs from one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(skip)]
    pub scores: AggregateScores,
    pub ranking: Vec<RankedEntry>,
    pub trends: TrendGroups,
}

impl Evaluation {
    /// Currency to 2-decimal score string, strongest first.
    pub fn score_table(&self) -> Vec<(Currency, String)> {
        self.ranking
            .iter()
            .map(|entry| (entry.currency, entry.formatted_score()))
            .collect()
    }

    pub fn strongest(&self) -> Option<&RankedEntry> {
        self.ranking.first()
    }

    pub fn weakest(&self) -> Option<&RankedEntry> {
        self.ranking.last()
    }
}

pub fn evaluate(
    raw: &RawScores,
    pairs: &[CurrencyPair],
    threshold: f64,
) -> Result<Evaluation, StrengthError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(StrengthError::InvalidThreshold(threshold));
    }

    let scores = scorer::compute_aggregate_scores(raw);
    let ranking = scorer::rank(&scores);
    let trends = trend::classify_pairs(&scores, pairs, threshold)?;
    debug!(
        bullish = trends.bullish.len(),
        bearish = trends.bearish.len(),
        neutral = trends.neutral.len(),
        "Evaluated {} pairs",
        pairs.len()
    );

    Ok(Evaluation {
        scores,
        ranking,
        trends,
    })
}
