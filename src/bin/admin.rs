//! CLI administration tool for elo-lists.
//!
//! Operates directly on the SQLite database, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the tables if they are missing
//! cargo run --bin admin -- db init
//!
//! # Show row counts
//! cargo run --bin admin -- db info
//!
//! # Show every list with its item count
//! cargo run --bin admin -- lists
//!
//! # Report items left behind by deleted lists, optionally removing them
//! cargo run --bin admin -- orphans --delete
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, default `sqlite://app.db`

use elo_lists::application::services::{ItemService, ListService};
use elo_lists::infrastructure::persistence::{
    Database, SqliteItemRepository, SqliteListRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing elo-lists data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show all lists with their item counts
    Lists,

    /// Report items whose list no longer exists
    Orphans {
        /// Delete the orphaned items after reporting them
        #[arg(short, long)]
        delete: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create tables if they do not exist
    Init,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://app.db".to_string());

    let database = Database::open(&database_url, 1)
        .await
        .context("Failed to open database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &database).await?,
        Commands::Lists => handle_lists(&database).await?,
        Commands::Orphans { delete, yes } => handle_orphans(&database, delete, yes).await?,
    }

    database.close().await;

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, database: &Database) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            database
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Init => {
            database
                .migrate()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create schema: {}", e))?;

            println!("{}", "Tables `lists` and `items` are ready".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let pool = database.pool();
            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool.as_ref())
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!(
                "  Lists:  {}",
                count_rows(&pool, "lists").await?.to_string().bright_green().bold()
            );
            println!(
                "  Items:  {}",
                count_rows(&pool, "items").await?.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

async fn count_rows(pool: &SqlitePool, table: &'static str) -> Result<i64> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    if !exists {
        return Ok(0);
    }

    // `table` is one of two compile-time names, never user input.
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Prints every list with the number of items it holds.
///
/// # Output Format
///
/// ```text
/// Lists
///
///   ID    Title                          Items
///   ─────────────────────────────────────────────
///   1     Board games                    12
/// ```
async fn handle_lists(database: &Database) -> Result<()> {
    let list_service = ListService::new(
        Arc::new(SqliteListRepository::new(database.pool())),
        Arc::new(SqliteItemRepository::new(database.pool())),
    );

    println!("{}", "Lists".bright_blue().bold());
    println!();

    let lists = list_service
        .lists_with_item_counts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load lists: {}", e))?;

    if lists.is_empty() {
        println!("{}", "  No lists found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Items".bright_white().bold()
    );
    println!("  {}", "─".repeat(45).bright_black());

    for (list, item_count) in &lists {
        println!(
            "  {:<5} {:<30} {}",
            list.id.to_string().bright_black(),
            list.title.cyan(),
            item_count
        );
    }

    println!();
    println!("  Total: {}", lists.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Reports items whose `list_id` points at a deleted list.
///
/// Deleting a list never removes its items; this is the only place that
/// does, and only on request.
async fn handle_orphans(database: &Database, delete: bool, skip_confirm: bool) -> Result<()> {
    let item_service = ItemService::new(Arc::new(SqliteItemRepository::new(database.pool())));

    println!("{}", "Orphaned items".bright_blue().bold());
    println!();

    let orphans = item_service
        .orphaned_items()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load orphaned items: {}", e))?;

    if orphans.is_empty() {
        println!("{}", "  No orphaned items".green());
        return Ok(());
    }

    for item in &orphans {
        let list = match item.list_id {
            Some(list_id) => format!("list {list_id}"),
            None => "no list".to_string(),
        };

        println!(
            "  {:<5} {:<30} {}",
            item.id.to_string().bright_black(),
            item.title.cyan(),
            list.red()
        );
    }
    println!();
    println!("  Total: {}", orphans.len().to_string().bright_white().bold());
    println!();

    if !delete {
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} orphaned items?", orphans.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let removed = item_service
        .purge_orphans()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete orphaned items: {}", e))?;

    println!("{}", format!("Deleted {removed} items").green().bold());
    println!();

    Ok(())
}
