pub mod cli;
pub mod counter;
pub mod error;
pub mod form;
pub mod interface;
pub mod models;

pub use error::{CalorieError, Result};
pub use form::Form;
pub use models::{Balance, CalorieSummary, Category, Entry};
