//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://app.db"
//! export LISTEN="127.0.0.1:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database file (default: `sqlite://app.db`)
//! - `LISTEN` - Bind address (default: `127.0.0.1:8080`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LOG_LEVEL` - Set to `debug` to log every request's method, URI and body
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 15)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)

use anyhow::Result;
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use crate::web::middleware::request_log;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, every request is logged at debug level together with its body.
    pub log_request_bodies: bool,
    /// Upper bound for a single request, enforced at the transport layer.
    pub request_timeout_secs: u64,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that
    /// cannot be read at all.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://app.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let log_request_bodies = env::var("LOG_LEVEL")
            .map(|v| v == "debug")
            .unwrap_or(false);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            log_request_bodies,
            request_timeout_secs,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - `request_timeout_secs` or `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Log filter built from `RUST_LOG`.
    ///
    /// With body logging on, the request logger's target is raised to
    /// `debug` whatever `RUST_LOG` says, so `LOG_LEVEL=debug` alone is enough.
    pub fn env_filter(&self) -> EnvFilter {
        let filter = EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

        if !self.log_request_bodies {
            return filter;
        }

        match format!("{}=debug", request_log::TARGET).parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Request body logging: {}",
            if self.log_request_bodies { "on" } else { "off" }
        );
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
