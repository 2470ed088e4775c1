use anyhow::Result;
use clap::{Parser, Subcommand};
use fxstrength::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Path to the score sheet, overriding the configured location
    #[arg(short, long, global = true)]
    scores: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxstrength::AppCommand {
    fn from(cmd: Commands) -> fxstrength::AppCommand {
        match cmd {
            Commands::Report => fxstrength::AppCommand::Report,
            Commands::Rank => fxstrength::AppCommand::Rankings,
            Commands::Trends => fxstrength::AppCommand::Trends,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration and an example score sheet
    Setup,
    /// Display rankings, score table and trend predictions
    Report,
    /// Display currency strength rankings
    Rank,
    /// Display predicted trends for currency pairs
    Trends,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxstrength::cli::setup::setup(),
        command => fxstrength::run_command(
            command.map_or(fxstrength::AppCommand::Report, Into::into),
            cli.config_path.as_deref(),
            cli.scores.as_deref(),
            cli.json,
        ),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
