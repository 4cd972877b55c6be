//! bookman web server entry point.
//!
//! Reads configuration from the environment, opens the database pool,
//! and serves the catalog API plus static assets. Configuration or
//! pool-setup failures are fatal at startup.

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

use bookman_core::Config;
use bookman_server::{create_pool, http, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let config = Config::from_env();

    let pool = create_pool(&config)
        .await
        .context("database pool setup failed")?;
    let state = AppState::postgres(pool);

    http::serve(state, &config.http_addr)
        .await
        .context("http server failed")?;

    Ok(())
}
