//! HTML page handlers.

mod fallback;
mod items;
mod lists;
mod root;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use items::{ItemsTemplate, create_item_handler, item_handler, items_handler};
pub use lists::{ListsTemplate, create_list_handler, list_handler, lists_handler};
pub use root::root_handler;
