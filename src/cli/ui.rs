use crate::core::TrendLabel;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned 2-decimal score, green when positive and red when negative.
pub fn score_cell(score: f64) -> Cell {
    let cell = Cell::new(format!("{score:.2}")).set_alignment(CellAlignment::Right);
    if score > 0.0 {
        cell.fg(Color::Green)
    } else if score < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::DarkGrey)
    }
}

pub fn trend_color(label: TrendLabel) -> Color {
    match label {
        TrendLabel::Bullish => Color::Green,
        TrendLabel::Bearish => Color::Red,
        TrendLabel::Neutral => Color::DarkYellow,
    }
}

/// Header cell for a trend column, colored by trend.
pub fn trend_header_cell(label: TrendLabel, count: usize) -> Cell {
    Cell::new(format!("{label} ({count})"))
        .fg(trend_color(label))
        .add_attribute(Attribute::Bold)
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}
