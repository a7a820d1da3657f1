pub mod prompts;
pub mod render;

pub use prompts::{
    Action, acknowledge_alert, prompt_action, prompt_budget, prompt_category, prompt_entry,
    prompt_entry_number, prompt_yes_no,
};
pub use render::{SummaryView, display_form, display_summary, format_calories, render_summary};
