//! Item management service.

use std::sync::Arc;

use crate::domain::entities::{Item, NewItem, OrphanedItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

/// Service for creating, reading and deleting items.
///
/// Callers resolve the parent list before creating an item; the store does
/// not validate `list_id`.
pub struct ItemService<I: ItemRepository> {
    repository: Arc<I>,
}

impl<I: ItemRepository> ItemService<I> {
    /// Creates a new item service.
    pub fn new(repository: Arc<I>) -> Self {
        Self { repository }
    }

    /// Retrieves an item by id, regardless of list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the item does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_item(&self, id: i64) -> Result<Item, AppError> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item not found. Item ID: {id}")))
    }

    /// Retrieves an item by id within a list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the item does not exist or belongs
    /// to a different list.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_item_for_list(&self, id: i64, list_id: i64) -> Result<Item, AppError> {
        self.repository
            .find_for_list(id, list_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Item not found. Item ID: {id}, List ID: {list_id}"
                ))
            })
    }

    /// Creates an item under `list_id` with the default rating.
    ///
    /// No validation is applied to the title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_item(&self, title: String, list_id: i64) -> Result<i64, AppError> {
        let id = self.repository.create(NewItem { title, list_id }).await?;
        tracing::debug!(item_id = id, list_id, "Item created");
        Ok(id)
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_item(&self, item: &Item) -> Result<(), AppError> {
        self.repository.delete(item.id).await?;
        tracing::debug!(item_id = item.id, list_id = item.list_id, "Item deleted");
        Ok(())
    }

    /// Items left behind by deleted lists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn orphaned_items(&self) -> Result<Vec<OrphanedItem>, AppError> {
        self.repository.orphans().await
    }

    /// Removes items left behind by deleted lists; returns the count removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn purge_orphans(&self) -> Result<u64, AppError> {
        let removed = self.repository.delete_orphans().await?;
        tracing::info!(removed, "Orphaned items purged");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DEFAULT_RATING;
    use crate::domain::repositories::MockItemRepository;

    #[tokio::test]
    async fn test_create_item_forwards_title_and_list() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_item| new_item.title == "Halo" && new_item.list_id == 8)
            .times(1)
            .returning(|_| Ok(21));

        let service = ItemService::new(Arc::new(mock_repo));
        let id = service.create_item("Halo".to_string(), 8).await.unwrap();

        assert_eq!(id, 21);
    }

    #[tokio::test]
    async fn test_find_item_for_list_other_list_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_find_for_list()
            .withf(|id, list_id| *id == 1 && *list_id == 2)
            .times(1)
            .returning(|_, _| Ok(None));

        let service = ItemService::new(Arc::new(mock_repo));
        let result = service.find_item_for_list(1, 2).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_item_for_list_success() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_find_for_list()
            .times(1)
            .returning(|id, list_id| {
                Ok(Some(Item::new(id, "Tetris".to_string(), DEFAULT_RATING, list_id)))
            });

        let service = ItemService::new(Arc::new(mock_repo));
        let item = service.find_item_for_list(6, 3).await.unwrap();

        assert_eq!(item.id, 6);
        assert_eq!(item.list_id, 3);
        assert_eq!(item.rating, DEFAULT_RATING);
    }

    #[tokio::test]
    async fn test_find_item_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_find().times(1).returning(|_| Ok(None));

        let service = ItemService::new(Arc::new(mock_repo));
        let err = service.find_item(404).await.unwrap_err();

        assert_eq!(err.to_string(), "Item not found. Item ID: 404");
    }

    #[tokio::test]
    async fn test_delete_item_uses_item_id() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|_| Ok(()));

        let service = ItemService::new(Arc::new(mock_repo));
        let item = Item::new(10, "Myst".to_string(), DEFAULT_RATING, 1);

        assert!(service.delete_item(&item).await.is_ok());
    }

    #[tokio::test]
    async fn test_purge_orphans_returns_count() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete_orphans()
            .times(1)
            .returning(|| Ok(3));

        let service = ItemService::new(Arc::new(mock_repo));

        assert_eq!(service.purge_orphans().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_orphaned_items_passes_rows_through() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_orphans().times(1).returning(|| {
            Ok(vec![OrphanedItem {
                id: 4,
                title: "Loose".to_string(),
                list_id: None,
            }])
        });

        let service = ItemService::new(Arc::new(mock_repo));
        let orphans = service.orphaned_items().await.unwrap();

        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].list_id, None);
    }
}
