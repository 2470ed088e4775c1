//! Mutable store of in-progress raw scores, owned by the presentation layer.
//!
//! The engine never reads a sheet directly: every evaluation works on a
//! [`ScoreSheet::snapshot`], so edits racing with an evaluation are either
//! fully visible to it or not at all.
use crate::core::currency::Currency;
use crate::core::error::StrengthError;
use crate::core::indicator::Indicator;
use crate::core::scorer::RawScores;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ScoreSheet {
    inner: RwLock<RawScores>,
}

fn ensure_finite(
    currency: Currency,
    indicator: Indicator,
    value: f64,
) -> Result<(), StrengthError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StrengthError::InvalidScore {
            currency,
            indicator,
            value,
        })
    }
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing scores, rejecting non-finite values.
    pub fn from_raw(raw: RawScores) -> Result<Self, StrengthError> {
        for (currency, indicator, value) in raw.entries() {
            ensure_finite(currency, indicator, value)?;
        }
        Ok(Self {
            inner: RwLock::new(raw),
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read score sheet: {}", path.display()))?;

        let raw: RawScores = if content.trim().is_empty() {
            RawScores::new()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse score sheet: {}", path.display()))?
        };
        let sheet = Self::from_raw(raw)
            .with_context(|| format!("Invalid score sheet: {}", path.display()))?;
        debug!("Loaded score sheet from {}", path.display());
        Ok(sheet)
    }

    pub fn get(&self, currency: Currency, indicator: Indicator) -> f64 {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(currency, indicator)
    }

    pub fn set(
        &self,
        currency: Currency,
        indicator: Indicator,
        value: f64,
    ) -> Result<(), StrengthError> {
        ensure_finite(currency, indicator, value)?;
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(currency, indicator, value);
        Ok(())
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = RawScores::new();
    }

    /// Consistent copy of the current scores for one evaluation pass.
    pub fn snapshot(&self) -> RawScores {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
