//! List management service.

use std::sync::Arc;

use crate::domain::entities::{Item, List, NewList};
use crate::domain::repositories::{ItemRepository, ListRepository};
use crate::error::AppError;

/// Service for creating, reading and deleting lists.
///
/// Deleting a list never touches its items: they stay in the store with a
/// dangling `list_id`.
pub struct ListService<L: ListRepository, I: ItemRepository> {
    list_repository: Arc<L>,
    item_repository: Arc<I>,
}

impl<L: ListRepository, I: ItemRepository> ListService<L, I> {
    /// Creates a new list service.
    pub fn new(list_repository: Arc<L>, item_repository: Arc<I>) -> Self {
        Self {
            list_repository,
            item_repository,
        }
    }

    /// Returns every list in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn all_lists(&self) -> Result<Vec<List>, AppError> {
        self.list_repository.all().await
    }

    /// Returns every list paired with its item count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn lists_with_item_counts(&self) -> Result<Vec<(List, i64)>, AppError> {
        self.list_repository.all_with_item_counts().await
    }

    /// Retrieves a list by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the list does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_list(&self, id: i64) -> Result<List, AppError> {
        self.list_repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("List not found. List ID: {id}")))
    }

    /// Creates a list and returns its id. The title is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_list(&self, title: String) -> Result<i64, AppError> {
        let id = self.list_repository.create(NewList { title }).await?;
        tracing::debug!(list_id = id, "List created");
        Ok(id)
    }

    /// Deletes a list, leaving its items in place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_list(&self, list: &List) -> Result<(), AppError> {
        self.list_repository.delete(list.id).await?;
        tracing::debug!(list_id = list.id, "List deleted");
        Ok(())
    }

    /// Returns the items belonging to `list`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn items(&self, list: &List) -> Result<Vec<Item>, AppError> {
        self.item_repository.for_list(list.id).await
    }
}
