mod controller;
mod import;

pub use controller::Form;
pub use import::{EntrySnapshot, FormSnapshot, load_form, parse_form};
