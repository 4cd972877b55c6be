//! Book endpoints: search/list, text body, metadata edit.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::Value;

use bookman_core::Book;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query; empty or missing means "list everything".
    #[serde(default)]
    pub q: String,
}

/// GET /api/search - list or search books.
///
/// With a non-empty `q`, returns books matching the query sorted by
/// descending relevance; otherwise the full list sorted by name.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.catalog().search(&params.q).await?;
    Ok(Json(books))
}

/// GET /book/{id} - plain-text body of one book.
///
/// The id is parsed as `i32`; non-numeric or out-of-range ids are
/// rejected by the extractor before the catalog is consulted.
async fn book_body(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    let body = state.catalog().body(id).await?;
    Ok(body)
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub id: i32,
    pub name: String,
    pub author: String,
}

/// POST /api/edit - update name and author of a book.
async fn edit(
    State(state): State<AppState>,
    Form(form): Form<EditForm>,
) -> Result<Json<Value>, ApiError> {
    state
        .catalog()
        .edit(form.id, &form.name, &form.author)
        .await?;
    Ok(Json(Value::Null))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(search))
        .route("/api/edit", post(edit))
        .route("/book/{id}", get(book_body))
}
