use crate::core::error::StrengthError;
use crate::core::pair::{CurrencyPair, default_pairs};
use crate::core::trend::DEFAULT_NEUTRAL_THRESHOLD;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_threshold() -> f64 {
    DEFAULT_NEUTRAL_THRESHOLD
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_pairs")]
    pub pairs: Vec<CurrencyPair>,
    pub scores_path: Option<String>,
    pub data_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            threshold: DEFAULT_NEUTRAL_THRESHOLD,
            pairs: default_pairs(),
            scores_path: None,
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no config file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxstrength")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("in", "codito", "fxstrength")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Score sheet location: an explicit override, then `scores_path`, then
    /// `scores.yaml` in the data directory.
    pub fn resolve_scores_path(&self, override_path: Option<&str>) -> Result<PathBuf> {
        match override_path.or(self.scores_path.as_deref()) {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(self.default_data_path()?.join("scores.yaml")),
        }
    }

    pub fn validate(&self) -> Result<(), StrengthError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(StrengthError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
