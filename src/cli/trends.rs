use super::ui;
use crate::core::{TrendGroups, TrendLabel};
use comfy_table::Cell;

const LABELS: [TrendLabel; 3] = [TrendLabel::Bullish, TrendLabel::Bearish, TrendLabel::Neutral];

/// Three columns of pairs, each in watch-list order.
pub fn render_trends(groups: &TrendGroups) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(
        LABELS
            .iter()
            .map(|label| ui::trend_header_cell(*label, groups.get(*label).len()))
            .collect::<Vec<_>>(),
    );

    let rows = LABELS
        .iter()
        .map(|label| groups.get(*label).len())
        .max()
        .unwrap_or(0);
    for i in 0..rows {
        table.add_row(
            LABELS
                .iter()
                .map(|label| match groups.get(*label).get(i) {
                    Some(pair) => Cell::new(pair).fg(ui::trend_color(*label)),
                    None => Cell::new(""),
                })
                .collect::<Vec<_>>(),
        );
    }

    let mut output = format!(
        "{}\n\n{table}",
        ui::style_text("Currency Pair Trend Predictions", ui::StyleType::Title)
    );
    if groups.is_empty() {
        output.push_str(&format!(
            "\n{}",
            ui::style_text("No currency pairs configured.", ui::StyleType::Subtle)
        ));
    }
    output
}

pub fn run(groups: &TrendGroups) {
    println!("{}", render_trends(groups));
}
