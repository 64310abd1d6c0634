//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ItemService, ListService};
use crate::infrastructure::persistence::{Database, SqliteItemRepository, SqliteListRepository};

pub type AppListService = ListService<SqliteListRepository, SqliteItemRepository>;
pub type AppItemService = ItemService<SqliteItemRepository>;

/// Handler state built once at startup around a single database handle.
#[derive(Clone)]
pub struct AppState {
    pub list_service: Arc<AppListService>,
    pub item_service: Arc<AppItemService>,
}

impl AppState {
    /// Wires the services on top of `database`.
    pub fn new(database: &Database) -> Self {
        let list_repository = Arc::new(SqliteListRepository::new(database.pool()));
        let item_repository = Arc::new(SqliteItemRepository::new(database.pool()));

        Self {
            list_service: Arc::new(ListService::new(list_repository, item_repository.clone())),
            item_service: Arc::new(ItemService::new(item_repository)),
        }
    }
}
