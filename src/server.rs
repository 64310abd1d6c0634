//! HTTP server initialization and runtime setup.
//!
//! Handles the database handle, schema creation and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::Database;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - `lists` and `items` tables (idempotent)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database open or schema creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let database = Database::open(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    database
        .migrate()
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database schema ready");

    let state = AppState::new(&database);
    let app = app_router(state, config.log_request_bodies, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
