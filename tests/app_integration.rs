use fxstrength::core::{Currency, TrendLabel};
use std::fs;
use std::path::Path;
use tracing::info;

mod test_utils {
    use std::fs;
    use tempfile::TempDir;

    pub struct Workspace {
        pub dir: TempDir,
        pub config_path: String,
        pub scores_path: String,
    }

    pub fn create_workspace(config: &str, scores: &str) -> Workspace {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.yaml");
        let scores_path = dir.path().join("scores.yaml");
        fs::write(&config_path, config).expect("Failed to write config file");
        fs::write(&scores_path, scores).expect("Failed to write score sheet");

        Workspace {
            config_path: config_path.to_str().unwrap().to_string(),
            scores_path: scores_path.to_str().unwrap().to_string(),
            dir,
        }
    }
}

#[test_log::test]
fn test_full_app_flow() {
    let ws = test_utils::create_workspace(
        "threshold: 0.3\n",
        r#"
USD:
  interest_rate: 10
EUR:
  cpi: 1.0
"#,
    );

    for command in [
        fxstrength::AppCommand::Report,
        fxstrength::AppCommand::Rankings,
        fxstrength::AppCommand::Trends,
    ] {
        for json in [false, true] {
            let result = fxstrength::run_command(
                command,
                Some(&ws.config_path),
                Some(&ws.scores_path),
                json,
            );
            assert!(
                result.is_ok(),
                "{command:?} (json={json}) failed with: {:?}",
                result.err()
            );
        }
    }
}

#[test_log::test]
fn test_single_indicator_pipeline() {
    let ws = test_utils::create_workspace("{}\n", "USD:\n  interest_rate: 10\n");

    let evaluation =
        fxstrength::load_evaluation(Some(&ws.config_path), Some(&ws.scores_path)).unwrap();
    info!(ranking = ?evaluation.ranking, "Evaluation complete");

    let top = evaluation.strongest().unwrap();
    assert_eq!(top.currency, Currency::Usd);
    assert_eq!(top.formatted_score(), "3.00");

    let bullish: Vec<String> = evaluation.trends.bullish.iter().map(|p| p.to_string()).collect();
    let bearish: Vec<String> = evaluation.trends.bearish.iter().map(|p| p.to_string()).collect();
    assert_eq!(bullish, ["USDCAD", "USDCHF", "USDJPY", "USDNOK", "USDSEK"]);
    assert_eq!(bearish, ["AUDUSD", "EURUSD", "GBPUSD", "NZDUSD"]);
    assert_eq!(
        evaluation.trends.get(TrendLabel::Neutral).len(),
        fxstrength::core::default_pairs().len() - 9
    );
}

#[test_log::test]
fn test_config_pairs_and_threshold() {
    let ws = test_utils::create_workspace(
        "threshold: 0.5\npairs: [GBPJPY, JPYGBP, EURUSD]\n",
        "GBP:\n  interest_rate: 2.0\nEUR:\n  interest_rate: 1.5\n",
    );

    let evaluation =
        fxstrength::load_evaluation(Some(&ws.config_path), Some(&ws.scores_path)).unwrap();
    // GBP = 0.60, EUR = 0.45
    assert_eq!(evaluation.trends.bullish.len(), 1);
    assert_eq!(evaluation.trends.bullish[0].to_string(), "GBPJPY");
    assert_eq!(evaluation.trends.bearish[0].to_string(), "JPYGBP");
    assert_eq!(evaluation.trends.neutral[0].to_string(), "EURUSD");
}

#[test_log::test]
fn test_scores_path_from_config() {
    let ws = test_utils::create_workspace("{}\n", "NZD:\n  gdp_growth: 5\n");
    let config_path = ws.dir.path().join("with_scores.yaml");
    fs::write(
        &config_path,
        format!("scores_path: \"{}\"\n", ws.scores_path.replace('\\', "/")),
    )
    .unwrap();

    let evaluation = fxstrength::load_evaluation(config_path.to_str(), None).unwrap();
    assert_eq!(evaluation.strongest().unwrap().currency, Currency::Nzd);
}

#[test_log::test]
fn test_unknown_pair_in_config_fails() {
    let ws = test_utils::create_workspace("pairs: [USDXAU]\n", "{}\n");
    let result = fxstrength::load_evaluation(Some(&ws.config_path), Some(&ws.scores_path));
    assert!(result.is_err());
}

#[test_log::test]
fn test_missing_score_sheet_fails() {
    let ws = test_utils::create_workspace("{}\n", "");
    let missing = Path::new(&ws.scores_path).with_file_name("missing.yaml");

    let err = fxstrength::load_evaluation(Some(&ws.config_path), missing.to_str()).unwrap_err();
    assert!(err.to_string().contains("Score sheet not found"));
}

#[test_log::test]
fn test_invalid_score_sheet_fails() {
    let ws = test_utils::create_workspace("{}\n", "USD:\n  interest_rate: not-a-number\n");
    let result = fxstrength::run_command(
        fxstrength::AppCommand::Report,
        Some(&ws.config_path),
        Some(&ws.scores_path),
        false,
    );
    assert!(result.is_err());
}
