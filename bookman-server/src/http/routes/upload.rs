//! Multipart book upload.

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use bookman_core::UploadedFile;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Suffix stripped from uploaded filenames to form the book name.
const TEXT_SUFFIX: &str = ".txt";

fn book_name(filename: &str) -> String {
    filename
        .strip_suffix(TEXT_SUFFIX)
        .unwrap_or(filename)
        .to_string()
}

/// POST /api/upload - batch upload of text files.
///
/// Reads the multipart body part by part, then hands the whole batch
/// to the catalog in a single call so it lands in one transaction.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("multipart error: {err}")))?
    {
        let name = field.file_name().map(book_name).unwrap_or_default();
        let body = field
            .text()
            .await
            .map_err(|err| ApiError::BadRequest(format!("multipart error: {err}")))?;

        files.push(UploadedFile { name, body });
    }

    state.catalog().upload(files).await?;
    Ok(Json(Value::Null))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/upload", post(upload))
}
