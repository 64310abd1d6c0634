//! SQLite implementation of item repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{DEFAULT_RATING, Item, NewItem, OrphanedItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    title: Option<String>,
    rating: Option<i64>,
    list_id: Option<i64>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(
            row.id,
            row.title.unwrap_or_default(),
            row.rating.unwrap_or(DEFAULT_RATING),
            row.list_id.unwrap_or_default(),
        )
    }
}

impl From<ItemRow> for OrphanedItem {
    fn from(row: ItemRow) -> Self {
        OrphanedItem {
            id: row.id,
            title: row.title.unwrap_or_default(),
            list_id: row.list_id,
        }
    }
}

/// SQLite repository for the `items` table.
///
/// Every insert writes [`DEFAULT_RATING`]; nothing here updates a rating.
pub struct SqliteItemRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn create_table(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY,
                title TEXT,
                rating INTEGER,
                list_id INTEGER,
                FOREIGN KEY (list_id) REFERENCES lists(id)
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn for_list(&self, list_id: i64) -> Result<Vec<Item>, AppError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, title, rating, list_id FROM items WHERE list_id = ? ORDER BY id",
        )
        .bind(list_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Item>, AppError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, title, rating, list_id FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Item::from))
    }

    async fn find_for_list(&self, id: i64, list_id: i64) -> Result<Option<Item>, AppError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, title, rating, list_id FROM items WHERE id = ? AND list_id = ?",
        )
        .bind(id)
        .bind(list_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Item::from))
    }

    async fn create(&self, new_item: NewItem) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO items (title, rating, list_id) VALUES (?, ?, ?)")
            .bind(new_item.title)
            .bind(DEFAULT_RATING)
            .bind(new_item.list_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn orphans(&self) -> Result<Vec<OrphanedItem>, AppError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, title, rating, list_id
            FROM items
            WHERE NOT EXISTS (SELECT 1 FROM lists WHERE lists.id = items.list_id)
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(OrphanedItem::from).collect())
    }

    async fn delete_orphans(&self) -> Result<u64, AppError> {
        let result = sqlx::query(
            "DELETE FROM items WHERE NOT EXISTS (SELECT 1 FROM lists WHERE lists.id = items.list_id)",
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
