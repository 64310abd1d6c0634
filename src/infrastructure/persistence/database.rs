//! SQLite connection pool setup and schema creation.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{ItemRepository, ListRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::{SqliteItemRepository, SqliteListRepository};

/// Process-wide handle to the SQLite database file.
///
/// Opened once at startup and shared by every handler through
/// [`crate::state::AppState`]. Foreign keys are switched off on every
/// connection, so `items.list_id` is declared but not enforced and deleting
/// a list leaves its items in place.
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Opens (and creates if missing) the database at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the file cannot be opened.
    pub async fn open(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(false)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Opens a private in-memory database.
    ///
    /// Uses a single connection that is never recycled, since every SQLite
    /// connection to `:memory:` sees its own empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot be initialized.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Creates both tables if they do not exist. Safe to run on every start.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn migrate(&self) -> Result<(), AppError> {
        SqliteListRepository::new(self.pool()).create_table().await?;
        SqliteItemRepository::new(self.pool()).create_table().await?;
        Ok(())
    }

    /// Shared pool handle for building repositories.
    pub fn pool(&self) -> Arc<SqlitePool> {
        self.pool.clone()
    }

    /// Runs a trivial query to confirm the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the query fails.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
