//! Database layer - connection pool and catalog operations.
//!
//! Pooling, connection reuse, and health checks are sqlx's job; this
//! layer only builds the pool from configuration and runs the five
//! fixed catalog statements against it.

pub mod catalog;
pub mod pool;

pub use catalog::{Catalog, CatalogError, PgCatalog};
pub use pool::{create_pool, PoolError};
