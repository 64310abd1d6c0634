//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries against a single database file.
//!
//! # Components
//!
//! - [`Database`] - Connection pool and idempotent schema creation
//! - [`SqliteListRepository`] - `lists` table
//! - [`SqliteItemRepository`] - `items` table

pub mod database;
pub mod sqlite_item_repository;
pub mod sqlite_list_repository;

pub use database::Database;
pub use sqlite_item_repository::SqliteItemRepository;
pub use sqlite_list_repository::SqliteListRepository;
