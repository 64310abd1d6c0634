//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers a small API
//! that already speaks in [`crate::error::AppError`] terms.
//!
//! # Available Services
//!
//! - [`services::list_service::ListService`] - Lists and their item collections
//! - [`services::item_service::ItemService`] - Items, scoped lookups, orphan maintenance

pub mod services;
