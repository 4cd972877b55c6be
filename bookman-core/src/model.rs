//! Catalog domain model.

use serde::Serialize;

/// Book list/search result projection.
///
/// `rank` is a relevance score and is only meaningful when the result
/// came from a non-empty search query; plain listings carry rank 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    /// Book ID.
    pub id: i32,

    /// Book name.
    pub name: String,

    /// Author name.
    pub author: String,

    /// Search result rank.
    pub rank: f64,
}

/// Single book with its full text body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullBook {
    /// Book ID.
    pub id: i32,

    /// Book name.
    pub name: String,

    /// Author name.
    pub author: String,

    /// Book contents.
    pub body: String,
}

/// Transient record for one uploaded file.
///
/// Built from a single multipart request part and consumed by the
/// catalog's bulk insert; never persisted in memory beyond the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Book name, the submitted filename with its `.txt` suffix
    /// stripped.
    pub name: String,

    /// Book contents.
    pub body: String,
}
