//! Route handlers.
//!
//! - books: search/list, text body, metadata edit
//! - upload: multipart batch upload

pub mod books;
pub mod upload;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(books::router())
        .merge(upload::router())
        .route("/api/panic", get(api_panic))
}

/// GET /api/panic - deliberately panics to exercise the recovery
/// layer.
async fn api_panic() {
    panic!("this is a test panic");
}
