//! Database connection pool setup.
//!
//! The DSN from configuration never carries the password; it is read
//! from the configured secrets file and injected here before the pool
//! is opened.

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use thiserror::Error;

use bookman_core::Config;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Pool setup failure, fatal at startup.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to read password file {path:?}: {source}")]
    Secret {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid database dsn: {0}")]
    Dsn(#[source] sqlx::Error),

    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Create a PostgreSQL connection pool from configuration.
///
/// Reads the password from `config.password_path`, parses `config.dsn`
/// into connection options, injects the password, and opens the pool.
/// The password file contents are used verbatim, including any
/// trailing newline.
pub async fn create_pool(config: &Config) -> Result<PgPool, PoolError> {
    let password =
        tokio::fs::read_to_string(&config.password_path)
            .await
            .map_err(|source| PoolError::Secret {
                path: config.password_path.clone(),
                source,
            })?;

    let options = PgConnectOptions::from_str(&config.dsn)
        .map_err(PoolError::Dsn)?
        .password(&password);

    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(PoolError::Connect)
}
