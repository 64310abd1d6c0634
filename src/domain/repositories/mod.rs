//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the store. Concrete implementations live in
//! `crate::infrastructure::persistence`; mocks are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`ListRepository`] - `lists` table CRUD
//! - [`ItemRepository`] - `items` table CRUD, scoped lookups, orphan maintenance

pub mod item_repository;
pub mod list_repository;

pub use item_repository::ItemRepository;
pub use list_repository::ListRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
#[cfg(test)]
pub use list_repository::MockListRepository;
