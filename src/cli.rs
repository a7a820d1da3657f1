use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{CalorieError, Result};
use crate::models::Category;

/// Calorie counter: total meals and exercise against a daily budget.
#[derive(Parser, Debug)]
#[command(name = "calorie_counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed the form from a JSON snapshot (read only).
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Log form activity at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in the form step by step.
    #[default]
    Interactive,

    /// Compute the balance in one go from command-line values.
    Calc(CalcArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct CalcArgs {
    /// Daily calorie budget.
    #[arg(short, long, allow_hyphen_values = true)]
    pub budget: Option<String>,

    /// Breakfast calories (repeat for more entries).
    #[arg(long, allow_hyphen_values = true)]
    pub breakfast: Vec<String>,

    /// Lunch calories (repeat for more entries).
    #[arg(long, allow_hyphen_values = true)]
    pub lunch: Vec<String>,

    /// Dinner calories (repeat for more entries).
    #[arg(long, allow_hyphen_values = true)]
    pub dinner: Vec<String>,

    /// Snack calories (repeat for more entries).
    #[arg(long, allow_hyphen_values = true)]
    pub snacks: Vec<String>,

    /// Calories burned by exercise (repeat for more entries).
    #[arg(long, allow_hyphen_values = true)]
    pub exercise: Vec<String>,

    /// Entry as CATEGORY=CALORIES; close misspellings of the category are accepted.
    #[arg(short, long = "entry", value_name = "CATEGORY=CALORIES", allow_hyphen_values = true)]
    pub entries: Vec<String>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Split a `CATEGORY=CALORIES` argument, resolving the category loosely.
pub fn parse_entry_arg(arg: &str) -> Result<(Category, String)> {
    let (category, calories) = arg
        .split_once('=')
        .ok_or_else(|| CalorieError::MalformedEntry(arg.to_string()))?;
    Ok((Category::resolve(category)?, calories.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_interactive() {
        let cli = Cli::parse_from(["calorie_counter"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Interactive));
    }

    #[test]
    fn test_calc_repeated_values() {
        let cli = Cli::parse_from([
            "calorie_counter",
            "calc",
            "--budget",
            "2000",
            "--breakfast",
            "300",
            "--breakfast",
            "200",
            "--exercise",
            "-150",
            "--json",
        ]);

        match cli.command {
            Some(Command::Calc(args)) => {
                assert_eq!(args.budget.as_deref(), Some("2000"));
                assert_eq!(args.breakfast, vec!["300", "200"]);
                assert_eq!(args.exercise, vec!["-150"]);
                assert!(args.lunch.is_empty());
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_entry_arg() {
        let (category, calories) = parse_entry_arg("lnch=450").unwrap();
        assert_eq!(category, Category::Lunch);
        assert_eq!(calories, "450");

        assert!(matches!(
            parse_entry_arg("lunch"),
            Err(CalorieError::MalformedEntry(_))
        ));
        assert!(matches!(
            parse_entry_arg("xyz=1"),
            Err(CalorieError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["calorie_counter", "calc", "-v", "--file", "form.json"]);
        assert!(cli.verbose);
        assert_eq!(cli.file, Some(PathBuf::from("form.json")));
    }
}
