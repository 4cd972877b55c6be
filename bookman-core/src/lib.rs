//! bookman-core: shared types for the bookman catalog
//!
//! Holds the process configuration and the catalog domain model.
//! No web or database dependencies live here; bookman-server layers
//! those on top.

pub mod config;
pub mod model;

pub use config::Config;
pub use model::{Book, FullBook, UploadedFile};
