use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");
const EXAMPLE_SCORES: &str = include_str!("../../docs/example_scores.yaml");

fn write_new_file(path: &Path, content: &str, what: &str) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{what} already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {what} to {}", path.display()))?;

    info!("Created {what} at {}", path.display());
    Ok(())
}

/// Creates the default configuration file and an example score sheet at the
/// default locations
pub fn setup() -> Result<()> {
    let config_path = AppConfig::default_config_path()?;
    let scores_path = AppConfig::default().resolve_scores_path(None)?;
    setup_at_path(config_path, scores_path)
}

/// Creates the configuration file and example score sheet at the specified paths.
/// Neither file is written if the configuration already exists.
pub fn setup_at_path<P: AsRef<Path>, Q: AsRef<Path>>(config_path: P, scores_path: Q) -> Result<()> {
    write_new_file(config_path.as_ref(), EXAMPLE_CONFIG, "Configuration file")?;

    let scores_path = scores_path.as_ref();
    if scores_path.exists() {
        info!("Keeping existing score sheet at {}", scores_path.display());
        return Ok(());
    }
    write_new_file(scores_path, EXAMPLE_SCORES, "Score sheet")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreSheet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_config_and_scores() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config").join("config.yaml");
        let scores_path = temp_dir.path().join("data").join("scores.yaml");

        setup_at_path(&config_path, &scores_path)?;

        assert!(config_path.exists());
        assert!(scores_path.exists());
        let content = fs::read_to_string(&config_path)?;
        assert!(content.contains("threshold:"));
        assert!(content.contains("# Example configuration file for fxstrength"));

        Ok(())
    }

    #[test]
    fn test_setup_fails_if_config_exists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        let scores_path = temp_dir.path().join("scores.yaml");

        std::fs::write(&config_path, "test")?;

        let result = setup_at_path(&config_path, &scores_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert!(!scores_path.exists());

        Ok(())
    }

    #[test]
    fn test_setup_keeps_existing_scores() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        let scores_path = temp_dir.path().join("scores.yaml");
        std::fs::write(&scores_path, "USD:\n  cpi: 1.0\n")?;

        setup_at_path(&config_path, &scores_path)?;

        assert_eq!(fs::read_to_string(&scores_path)?, "USD:\n  cpi: 1.0\n");
        Ok(())
    }

    #[test]
    fn test_example_files_are_valid() -> Result<()> {
        let config: AppConfig = serde_yaml::from_str(EXAMPLE_CONFIG)
            .context("Failed to parse example config as YAML")?;
        config.validate()?;
        assert!(!config.pairs.is_empty());

        let temp_dir = TempDir::new()?;
        let scores_path = temp_dir.path().join("scores.yaml");
        fs::write(&scores_path, EXAMPLE_SCORES)?;
        ScoreSheet::load_from_path(&scores_path)?;

        Ok(())
    }
}
