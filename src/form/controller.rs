use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::counter;
use crate::error::{CalorieError, Result};
use crate::interface::{SummaryView, render_summary};
use crate::models::{CalorieSummary, Category, Entry};

/// Output panel: the last rendered summary and whether it is shown.
#[derive(Debug, Clone)]
struct OutputPanel {
    view: Option<SummaryView>,
    hidden: bool,
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self {
            view: None,
            hidden: true,
        }
    }
}

/// The calorie form: entries per category, the budget field and the output panel.
///
/// All field values are raw text until [`Form::calculate`] reads them.
#[derive(Debug, Clone, Default)]
pub struct Form {
    entries: BTreeMap<Category, Vec<Entry>>,
    budget: String,
    output: OutputPanel,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw budget field text.
    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn set_budget(&mut self, value: impl Into<String>) {
        self.budget = value.into();
    }

    /// Entries of one category in the order they were added.
    pub fn entries(&self, category: Category) -> &[Entry] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entry_count(&self, category: Category) -> usize {
        self.entries(category).len()
    }

    /// Entries across all categories.
    pub fn total_entries(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Append a name/calories pair to a category.
    ///
    /// The entry is numbered one past the category's current count. Values
    /// are stored as given; nothing is validated until submit.
    pub fn add_entry(
        &mut self,
        category: Category,
        name: impl Into<String>,
        calories: impl Into<String>,
    ) -> &Entry {
        let list = self.entries.entry(category).or_default();
        let number = list.len() + 1;
        let entry = Entry::new(category, number, name, calories);
        debug!(
            name_field = %entry.name_field_id(),
            calories_field = %entry.calories_field_id(),
            "added entry"
        );
        list.push(entry);
        &list[number - 1]
    }

    /// Entry `number` of a category, if it exists.
    pub fn entry(&self, category: Category, number: usize) -> Option<&Entry> {
        self.entries(category).iter().find(|e| e.number == number)
    }

    /// Append an empty name/calories pair to a category.
    pub fn add_blank_entry(&mut self, category: Category) -> &Entry {
        self.add_entry(category, "", "")
    }

    /// Overwrite the fields of an existing entry.
    pub fn set_entry(
        &mut self,
        category: Category,
        number: usize,
        name: impl Into<String>,
        calories: impl Into<String>,
    ) -> Result<()> {
        let entry = self
            .entries
            .get_mut(&category)
            .and_then(|list| list.iter_mut().find(|e| e.number == number))
            .ok_or(CalorieError::EntryNotFound { category, number })?;

        entry.name = name.into();
        entry.calories = calories.into();
        debug!(calories_field = %entry.calories_field_id(), "updated entry");
        Ok(())
    }

    /// Submit the form.
    ///
    /// On success the output panel is replaced with the new summary and shown.
    /// On invalid input the error is returned and the panel keeps whatever it
    /// showed before.
    pub fn calculate(&mut self) -> Result<CalorieSummary> {
        let tally = counter::tally(self)?;
        let summary = tally.summary();
        let view = render_summary(&summary);

        info!(
            remaining = summary.remaining,
            balance = %summary.balance,
            "calculated calorie balance"
        );

        self.output.view = Some(view);
        self.output.hidden = false;
        Ok(summary)
    }

    /// Remove every entry, empty the budget, and clear and hide the output.
    pub fn clear(&mut self) {
        let removed = self.total_entries();
        self.entries.clear();
        self.budget.clear();
        self.output = OutputPanel::default();
        debug!(removed, "cleared form");
    }

    /// Last rendered summary, whether or not it is visible.
    pub fn output(&self) -> Option<&SummaryView> {
        self.output.view.as_ref()
    }

    pub fn is_output_hidden(&self) -> bool {
        self.output.hidden
    }
}
