use serde::Serialize;

use crate::form::Form;
use crate::models::{CalorieSummary, Category, Entry};

/// Display-ready form of a [`CalorieSummary`].
///
/// Built by [`render_summary`] without touching any output surface, so the
/// text can be checked directly in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// e.g. "500 Calorie Surplus".
    pub headline: String,
    /// "surplus" or "deficit".
    pub class: String,
    /// Budgeted, consumed and burned lines, in that order.
    pub breakdown: Vec<String>,
}

impl SummaryView {
    /// Markup for the output panel.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<span class=\"{}\">{}</span>\n<hr>\n",
            self.class, self.headline
        );
        for line in &self.breakdown {
            html.push_str(&format!("<p>{}</p>\n", line));
        }
        html
    }
}

/// Format a calorie amount the way the output panel shows it.
pub fn format_calories(value: impl Into<i128>) -> String {
    value.into().to_string()
}

/// Map a computed summary to its view-model.
pub fn render_summary(summary: &CalorieSummary) -> SummaryView {
    SummaryView {
        headline: format!(
            "{} Calorie {}",
            format_calories(summary.magnitude()),
            summary.balance
        ),
        class: summary.balance.css_class().to_string(),
        breakdown: vec![
            format!("{} Calories Budgeted", format_calories(summary.budgeted)),
            format!("{} Calories Consumed", format_calories(summary.consumed)),
            format!("{} Calories Burned", format_calories(summary.burned)),
        ],
    }
}

/// Print a summary view to the terminal.
pub fn display_summary(view: &SummaryView) {
    println!();
    println!("=== {} ===", view.headline);
    println!("{}", "-".repeat(view.headline.len() + 8));
    for line in &view.breakdown {
        println!("  {}", line);
    }
    println!();
}

/// Widest entry name in characters, for column alignment.
fn name_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
}

/// One labelled entry row, name padded to `width` characters.
fn entry_line(entry: &Entry, width: usize) -> String {
    format!(
        "  {}: {:<width$}  {}: {}",
        entry.name_label(),
        entry.name,
        entry.calories_label(),
        entry.calories,
        width = width
    )
}

/// Print every category with its entries, the budget field and the output panel.
pub fn display_form(form: &Form) {
    println!();
    println!(
        "Budget: {}",
        if form.budget().is_empty() {
            "(empty)"
        } else {
            form.budget()
        }
    );

    for category in Category::ALL {
        let entries = form.entries(category);
        if entries.is_empty() {
            println!("{}: (none)", category.title());
            continue;
        }

        println!("{} ({} entries)", category.title(), entries.len());

        let width = name_width(entries);
        for entry in entries {
            println!("{}", entry_line(entry, width));
        }
    }

    match form.output() {
        Some(view) if !form.is_output_hidden() => display_summary(view),
        _ => println!(),
    }
}
