//! bookman-server: HTTP backend for the book catalog
//!
//! Exposes search/list, text retrieval, multipart upload, and metadata
//! editing over a PostgreSQL-backed catalog.

pub mod db;
pub mod http;
pub mod state;

pub use db::catalog::{Catalog, CatalogError, PgCatalog};
pub use db::pool::{create_pool, PoolError};
pub use state::AppState;
