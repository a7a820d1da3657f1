use dialoguer::{Confirm, Input, Select};

use crate::error::{CalorieError, Result};
use crate::models::{Category, Entry};

/// Actions offered by the interactive session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddEntry,
    EditEntry,
    SetBudget,
    Calculate,
    Clear,
    ShowForm,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::AddEntry,
        Action::EditEntry,
        Action::SetBudget,
        Action::Calculate,
        Action::Clear,
        Action::ShowForm,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::AddEntry => "Add entry",
            Action::EditEntry => "Edit entry",
            Action::SetBudget => "Set budget",
            Action::Calculate => "Calculate remaining calories",
            Action::Clear => "Clear",
            Action::ShowForm => "Show form",
            Action::Quit => "Quit",
        }
    }
}

/// Ask which action to run next.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::ALL.get(selection).copied().unwrap_or(Action::Quit))
}

/// Category selector.
pub fn prompt_category(prompt: &str, default: Category) -> Result<Category> {
    let titles: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();
    let default_index = Category::ALL
        .iter()
        .position(|c| *c == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&titles)
        .default(default_index)
        .interact()?;

    Category::ALL
        .get(selection)
        .copied()
        .ok_or_else(|| CalorieError::UnknownCategory(selection.to_string()))
}

/// Pick one entry of a category by its number.
pub fn prompt_entry_number(entries: &[Entry]) -> Result<usize> {
    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{}: {} ({} cal)", e.number, e.name, e.calories))
        .collect();

    let selection = Select::new()
        .with_prompt("Which entry?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).map(|e| e.number).unwrap_or(0))
}

/// Ask for the name and calories of an entry, starting from its current text.
///
/// Both answers are taken verbatim; they are only checked on calculate.
pub fn prompt_entry(entry: &Entry) -> Result<(String, String)> {
    let name: String = Input::new()
        .with_prompt(entry.name_label())
        .with_initial_text(entry.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let calories: String = Input::new()
        .with_prompt(entry.calories_label())
        .with_initial_text(entry.calories.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok((name, calories))
}

/// Ask for the daily calorie budget.
///
/// The current value is pre-filled as editable text, so erasing it and
/// pressing Enter clears the budget.
pub fn prompt_budget(current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Budget")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Show an error and block until the user acknowledges it.
pub fn acknowledge_alert(message: &str) -> Result<()> {
    eprintln!("{}", message);
    Input::<String>::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
