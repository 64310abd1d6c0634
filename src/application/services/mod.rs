//! Business logic services for the application layer.

pub mod item_service;
pub mod list_service;

pub use item_service::ItemService;
pub use list_service::ListService;
