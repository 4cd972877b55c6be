//! Application state shared across handlers.
//!
//! Handlers receive the catalog through `Router::with_state`, not from
//! an ambient request context, so a missing-injection bug cannot
//! exist. The `Arc<dyn Catalog>` seam is what lets tests substitute a
//! stub data layer.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::catalog::{Catalog, PgCatalog};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// State backed by the PostgreSQL catalog.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgCatalog::new(pool)))
    }

    pub fn catalog(&self) -> &dyn Catalog {
        &*self.catalog
    }
}
