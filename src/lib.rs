pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::{Evaluation, ScoreSheet, evaluate};
use anyhow::{Context, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Report,
    Rankings,
    Trends,
}

/// Loads the config and score sheet, then runs one evaluation pass.
pub fn load_evaluation(config_path: Option<&str>, scores_path: Option<&str>) -> Result<Evaluation> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let scores_path = config.resolve_scores_path(scores_path)?;
    if !scores_path.exists() {
        anyhow::bail!(
            "Score sheet not found at {}. Run `fxstrength setup` to create an example.",
            scores_path.display()
        );
    }
    let sheet = ScoreSheet::load_from_path(&scores_path)?;

    let evaluation = evaluate(&sheet.snapshot(), &config.pairs, config.threshold)
        .context("Failed to evaluate currency strength")?;
    info!(
        strongest = ?evaluation.strongest().map(|e| e.currency),
        weakest = ?evaluation.weakest().map(|e| e.currency),
        "Evaluated currency strength"
    );
    Ok(evaluation)
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    scores_path: Option<&str>,
    json: bool,
) -> Result<()> {
    info!("Currency strength tracker starting...");
    let evaluation = load_evaluation(config_path, scores_path)?;

    if json {
        let output = match command {
            AppCommand::Report => serde_json::to_string_pretty(&evaluation)?,
            AppCommand::Rankings => serde_json::to_string_pretty(&evaluation.ranking)?,
            AppCommand::Trends => serde_json::to_string_pretty(&evaluation.trends)?,
        };
        println!("{output}");
        return Ok(());
    }

    match command {
        AppCommand::Report => {
            cli::rankings::run(&evaluation);
            cli::ui::print_separator();
            cli::trends::run(&evaluation.trends);
        }
        AppCommand::Rankings => cli::rankings::run(&evaluation),
        AppCommand::Trends => cli::trends::run(&evaluation.trends),
    }
    Ok(())
}
