//! Converts raw indicator scores into weighted per-currency strength scores.
use crate::core::currency::Currency;
use crate::core::indicator::Indicator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Raw indicator scores per currency. Entries that are not set read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScores {
    values: BTreeMap<Currency, BTreeMap<Indicator, f64>>,
}

impl RawScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, currency: Currency, indicator: Indicator) -> f64 {
        self.values
            .get(&currency)
            .and_then(|scores| scores.get(&indicator))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, currency: Currency, indicator: Indicator, value: f64) {
        self.values
            .entry(currency)
            .or_default()
            .insert(indicator, value);
    }

    /// Builder form of [`RawScores::set`].
    pub fn with(mut self, currency: Currency, indicator: Indicator, value: f64) -> Self {
        self.set(currency, indicator, value);
        self
    }

    /// Explicitly set entries, in canonical currency then indicator order.
    pub fn entries(&self) -> impl Iterator<Item = (Currency, Indicator, f64)> + '_ {
        self.values.iter().flat_map(|(currency, scores)| {
            scores
                .iter()
                .map(move |(indicator, value)| (*currency, *indicator, *value))
        })
    }
}

/// Aggregate strength score per currency, iterated in canonical currency order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateScores(BTreeMap<Currency, f64>);

impl AggregateScores {
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.0.get(&currency).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.0.iter().map(|(currency, score)| (*currency, *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Currency, f64)> for AggregateScores {
    fn from_iter<T: IntoIterator<Item = (Currency, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One row of the strength ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-indexed position, strongest first.
    pub rank: usize,
    pub currency: Currency,
    pub score: f64,
}

impl RankedEntry {
    pub fn formatted_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Weighted sum of `raw * weight / 100` over every indicator, for every currency.
pub fn compute_aggregate_scores(raw: &RawScores) -> AggregateScores {
    Currency::ALL
        .into_iter()
        .map(|currency| {
            // Folding from +0.0 keeps all-zero inputs from summing to -0.0,
            // which total_cmp would rank below 0.0.
            let score = Indicator::ALL.iter().fold(0.0, |acc, indicator| {
                acc + raw.get(currency, *indicator) * f64::from(indicator.weight()) / 100.0
            });
            debug!("Aggregate score for {currency}: {score}");
            (currency, score)
        })
        .collect()
}

/// Orders currencies by score, highest first. Equal scores keep canonical
/// currency order since the sort is stable over that order.
pub fn rank(scores: &AggregateScores) -> Vec<RankedEntry> {
    let mut sorted: Vec<(Currency, f64)> = scores.iter().collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (currency, score))| RankedEntry {
            rank: i + 1,
            currency,
            score,
        })
        .collect()
}
