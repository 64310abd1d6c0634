#![allow(dead_code)]

use axum_test::TestServer;
use elo_lists::infrastructure::persistence::Database;
use elo_lists::state::AppState;
use elo_lists::web;

/// Fresh in-memory database with both tables created.
pub async fn test_database() -> Database {
    let database = Database::in_memory().await.unwrap();
    database.migrate().await.unwrap();
    database
}

pub async fn create_test_list(database: &Database, title: &str) -> i64 {
    sqlx::query("INSERT INTO lists (title) VALUES (?)")
        .bind(title)
        .execute(database.pool().as_ref())
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn create_test_item(database: &Database, title: &str, list_id: i64) -> i64 {
    sqlx::query("INSERT INTO items (title, rating, list_id) VALUES (?, 1000, ?)")
        .bind(title)
        .bind(list_id)
        .execute(database.pool().as_ref())
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_rows(database: &Database, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(database.pool().as_ref())
        .await
        .unwrap()
}

pub fn create_test_state(database: &Database) -> AppState {
    AppState::new(database)
}

/// Test server over the page routes, without the outer middleware stack.
pub fn make_server(database: &Database) -> TestServer {
    let app = web::routes::routes().with_state(create_test_state(database));
    TestServer::new(app).unwrap()
}
