//! Currency strength scoring and pair trend classification

pub mod config;
pub mod currency;
pub mod error;
pub mod evaluation;
pub mod indicator;
pub mod log;
pub mod pair;
pub mod scorer;
pub mod sheet;
pub mod trend;

// Re-export main types for cleaner imports
pub use currency::Currency;
pub use error::StrengthError;
pub use evaluation::{Evaluation, evaluate};
pub use indicator::Indicator;
pub use pair::{CurrencyPair, default_pairs};
pub use scorer::{AggregateScores, RankedEntry, RawScores, compute_aggregate_scores, rank};
pub use sheet::ScoreSheet;
pub use trend::{DEFAULT_NEUTRAL_THRESHOLD, TrendGroups, TrendLabel, classify_pairs};
