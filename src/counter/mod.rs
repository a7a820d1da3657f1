pub mod aggregate;
pub mod sanitize;

pub use aggregate::{CalorieTally, calories_from_inputs, coerce_number, tally};
pub use sanitize::{clean_input_string, find_invalid_input};
