use super::ui;
use crate::core::Evaluation;
use comfy_table::{Attribute, Cell, CellAlignment};

/// Strongest to weakest, one row per currency.
pub fn render_rankings(evaluation: &Evaluation) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Rank"),
        ui::header_cell("Currency"),
        ui::header_cell("Score"),
    ]);

    for entry in &evaluation.ranking {
        table.add_row(vec![
            Cell::new(entry.rank).set_alignment(CellAlignment::Right),
            Cell::new(entry.currency).add_attribute(Attribute::Bold),
            ui::score_cell(entry.score),
        ]);
    }

    format!(
        "{}\n\n{table}",
        ui::style_text(
            "Ranked from Strongest (1st) to Weakest (10th)",
            ui::StyleType::Title
        )
    )
}

/// Single row table of formatted scores, columns in ranked order.
pub fn render_score_table(evaluation: &Evaluation) -> String {
    let score_table = evaluation.score_table();

    let mut table = ui::new_styled_table();
    table.set_header(
        score_table
            .iter()
            .map(|(currency, _)| ui::header_cell(currency.code()))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        score_table
            .iter()
            .map(|(_, score)| Cell::new(score).set_alignment(CellAlignment::Right))
            .collect::<Vec<_>>(),
    );

    format!(
        "{}\n\n{table}",
        ui::style_text("Weighted Scores for Each Currency", ui::StyleType::Title)
    )
}

pub fn run(evaluation: &Evaluation) {
    println!("{}", render_rankings(evaluation));
    ui::print_separator();
    println!("{}", render_score_table(evaluation));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Currency, Indicator, RawScores, default_pairs, evaluate};

    fn sample_evaluation() -> Evaluation {
        let raw = RawScores::new()
            .with(Currency::Usd, Indicator::InterestRate, 10.0)
            .with(Currency::Jpy, Indicator::Cpi, -2.0);
        evaluate(&raw, &default_pairs(), 0.3).unwrap()
    }

    #[test]
    fn test_render_rankings() {
        console::set_colors_enabled(false);
        let output = render_rankings(&sample_evaluation());

        let usd = output.find("USD").unwrap();
        let aud = output.find("AUD").unwrap();
        let jpy = output.find("JPY").unwrap();
        assert!(usd < aud && aud < jpy);
        assert!(output.contains("3.00"));
        assert!(output.contains("-0.50"));
    }

    #[test]
    fn test_render_score_table() {
        console::set_colors_enabled(false);
        let output = render_score_table(&sample_evaluation());
        assert!(output.contains("Weighted Scores"));
        assert!(output.find("USD").unwrap() < output.find("JPY").unwrap());
        assert!(output.contains("0.00"));
    }
}
