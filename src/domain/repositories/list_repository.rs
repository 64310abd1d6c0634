//! Repository trait for list data access.

use crate::domain::entities::{List, NewList};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `lists` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteListRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_list.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Creates the `lists` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_table(&self) -> Result<(), AppError>;

    /// Returns every list in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn all(&self) -> Result<Vec<List>, AppError>;

    /// Returns every list with the number of items referencing it, in
    /// ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn all_with_item_counts(&self) -> Result<Vec<(List, i64)>, AppError>;

    /// Finds a list by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, id: i64) -> Result<Option<List>, AppError>;

    /// Inserts a list and returns the id assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_list: NewList) -> Result<i64, AppError>;

    /// Deletes a list by id.
    ///
    /// Deleting an id that does not exist is not an error. Items of the list
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
