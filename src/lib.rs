//! # Elo Lists
//!
//! A small server-rendered application for managing named lists of rated
//! items, built with Axum, SQLite and Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - List and item services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **Web Layer** ([`web`]) - HTML pages, forms and middleware
//!
//! Every item starts with a rating of 1000; nothing recomputes it.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://app.db"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ItemService, ListService};
    pub use crate::domain::entities::{DEFAULT_RATING, Item, List, NewItem, NewList, OrphanedItem};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::Database;
    pub use crate::state::AppState;
}
