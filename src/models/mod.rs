mod category;
mod entry;
mod summary;

pub use category::Category;
pub use entry::Entry;
pub use summary::{Balance, CalorieSummary};
