use std::path::Path;

use clap::Parser;
use tracing::Level;

use calorie_counter_rs::cli::{CalcArgs, Cli, Command, parse_entry_arg};
use calorie_counter_rs::error::{CalorieError, Result};
use calorie_counter_rs::form::{Form, load_form};
use calorie_counter_rs::interface::{
    Action, acknowledge_alert, display_form, display_summary, prompt_action, prompt_budget,
    prompt_category, prompt_entry, prompt_entry_number, prompt_yes_no, render_summary,
};
use calorie_counter_rs::models::Category;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let form = match &cli.file {
        Some(path) => load_form(path)?,
        None => Form::new(),
    };

    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(form, cli.file.as_deref()),
        Command::Calc(args) => cmd_calc(form, args),
    }
}

/// Compute the balance from command-line values added on top of any snapshot.
fn cmd_calc(mut form: Form, args: CalcArgs) -> Result<()> {
    if let Some(budget) = args.budget {
        form.set_budget(budget);
    }

    let groups = [
        (Category::Breakfast, args.breakfast),
        (Category::Lunch, args.lunch),
        (Category::Dinner, args.dinner),
        (Category::Snacks, args.snacks),
        (Category::Exercise, args.exercise),
    ];
    for (category, values) in groups {
        for value in values {
            let number = form.entry_count(category) + 1;
            form.add_entry(category, format!("{} {}", category.title(), number), value);
        }
    }

    for arg in &args.entries {
        let (category, calories) = parse_entry_arg(arg)?;
        let number = form.entry_count(category) + 1;
        form.add_entry(category, format!("{} {}", category.title(), number), calories);
    }

    let summary = form.calculate()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_summary(&summary))?);
    } else if let Some(view) = form.output() {
        display_summary(view);
    }

    Ok(())
}

/// Menu-driven session over a single form.
fn cmd_interactive(mut form: Form, source: Option<&Path>) -> Result<()> {
    if let Some(path) = source {
        println!(
            "Loaded {} entries from {}",
            form.total_entries(),
            path.display()
        );
    }

    let mut last_category = Category::Breakfast;

    loop {
        match prompt_action()? {
            Action::AddEntry => {
                let category = prompt_category("Add an entry to", last_category)?;
                last_category = category;

                let entry = form.add_blank_entry(category).clone();
                let (name, calories) = prompt_entry(&entry)?;
                form.set_entry(category, entry.number, name, calories)?;
                println!("Added entry {} to {}.", entry.number, category.title());
            }
            Action::EditEntry => {
                let category = prompt_category("Edit an entry in", last_category)?;
                last_category = category;

                if form.entry_count(category) == 0 {
                    println!("{} has no entries.", category.title());
                    continue;
                }

                let number = prompt_entry_number(form.entries(category))?;
                let Some(entry) = form.entry(category, number).cloned() else {
                    eprintln!("{}", CalorieError::EntryNotFound { category, number });
                    continue;
                };
                let (name, calories) = prompt_entry(&entry)?;
                form.set_entry(category, number, name, calories)?;
                println!("Updated entry {} in {}.", number, category.title());
            }
            Action::SetBudget => {
                let budget = prompt_budget(form.budget())?;
                form.set_budget(budget);
            }
            Action::Calculate => match form.calculate() {
                Ok(_) => {
                    if let Some(view) = form.output() {
                        display_summary(view);
                    }
                }
                Err(e @ CalorieError::InvalidInput(_)) => acknowledge_alert(&e.to_string())?,
                Err(e) => return Err(e),
            },
            Action::Clear => {
                if prompt_yes_no("Clear all entries and the budget?", true)? {
                    form.clear();
                    println!("Form cleared.");
                }
            }
            Action::ShowForm => display_form(&form),
            Action::Quit => break,
        }
    }

    Ok(())
}
