//! SQLite implementation of list repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{List, NewList};
use crate::domain::repositories::ListRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ListRow {
    id: i64,
    title: Option<String>,
}

#[derive(sqlx::FromRow)]
struct ListCountRow {
    id: i64,
    title: Option<String>,
    item_count: i64,
}

impl From<ListRow> for List {
    fn from(row: ListRow) -> Self {
        List::new(row.id, row.title.unwrap_or_default())
    }
}

/// SQLite repository for the `lists` table.
pub struct SqliteListRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteListRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for SqliteListRepository {
    async fn create_table(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS lists (
                id INTEGER PRIMARY KEY,
                title TEXT
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn all(&self) -> Result<Vec<List>, AppError> {
        let rows = sqlx::query_as::<_, ListRow>("SELECT id, title FROM lists ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(List::from).collect())
    }

    async fn all_with_item_counts(&self) -> Result<Vec<(List, i64)>, AppError> {
        let rows = sqlx::query_as::<_, ListCountRow>(
            r#"
            SELECT lists.id, lists.title, COUNT(items.id) AS item_count
            FROM lists
            LEFT JOIN items ON items.list_id = lists.id
            GROUP BY lists.id
            ORDER BY lists.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (List::new(row.id, row.title.unwrap_or_default()), row.item_count))
            .collect())
    }

    async fn find(&self, id: i64) -> Result<Option<List>, AppError> {
        let row = sqlx::query_as::<_, ListRow>("SELECT id, title FROM lists WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(List::from))
    }

    async fn create(&self, new_list: NewList) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO lists (title) VALUES (?)")
            .bind(new_list.title)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
