//! Database configuration and connection pool initialization.
//!
//! The pool is bounded and carries an explicit acquire timeout: when every
//! connection is busy, a request waits at most `DATABASE_ACQUIRE_TIMEOUT`
//! seconds for a free one instead of queueing forever.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool capacity (default: 10)
//! - `DATABASE_ACQUIRE_TIMEOUT`: seconds to wait for a free connection
//!   (default: 5)

use std::env;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            acquire_timeout_secs: env::var("DATABASE_ACQUIRE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if the database connection cannot be established; there is nothing
/// useful the server can do without its store.
pub async fn init_db_pool(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
        .expect("Failed to connect to database")
}
