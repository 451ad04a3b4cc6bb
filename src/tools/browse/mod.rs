//! Browse tools: categories and full entries

mod browse_category;
mod list_categories;
mod open_entry;

pub use browse_category::BrowseCategoryTool;
pub use list_categories::ListCategoriesTool;
pub use open_entry::OpenEntryTool;
