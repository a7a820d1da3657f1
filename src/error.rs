use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum CalorieError {
    /// A calorie field held scientific notation; carries the offending text.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Expected CATEGORY=CALORIES, got: {0}")]
    MalformedEntry(String),

    #[error("No entry {number} in {category}")]
    EntryNotFound { category: Category, number: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CalorieError>;
