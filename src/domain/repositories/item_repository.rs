//! Repository trait for item data access.

use crate::domain::entities::{Item, NewItem, OrphanedItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `items` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteItemRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_item.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Creates the `items` table if it does not exist yet.
    ///
    /// The table declares a foreign key to `lists`; whether it is enforced is
    /// up to the connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_table(&self) -> Result<(), AppError>;

    /// Returns the items of a list in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn for_list(&self, list_id: i64) -> Result<Vec<Item>, AppError>;

    /// Finds an item by its database ID, regardless of list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, id: i64) -> Result<Option<Item>, AppError>;

    /// Finds an item by id, only if it belongs to `list_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Item))` if the item exists and belongs to the list
    /// - `Ok(None)` if it does not exist or belongs to another list
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_for_list(&self, id: i64, list_id: i64) -> Result<Option<Item>, AppError>;

    /// Inserts an item with the default rating and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_item: NewItem) -> Result<i64, AppError>;

    /// Deletes an item by id only. Scoping to a list is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Returns items whose `list_id` matches no existing list, including
    /// rows with no `list_id` at all.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn orphans(&self) -> Result<Vec<OrphanedItem>, AppError>;

    /// Deletes every orphaned item and returns how many rows were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_orphans(&self) -> Result<u64, AppError>;
}
