//! Core domain entities.
//!
//! - [`List`] - A named container of items
//! - [`Item`] - A rated entry belonging to one list
//!
//! Creation inputs are separate structs (`NewList`, `NewItem`) so the store
//! stays the only source of ids and ratings.

pub mod item;
pub mod list;

pub use item::{DEFAULT_RATING, Item, NewItem, OrphanedItem};
pub use list::{List, NewList};
