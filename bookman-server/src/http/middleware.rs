//! Cross-cutting response processing: security headers and the
//! panic-to-500 conversion used by `CatchPanicLayer`.

use std::any::Any;

use axum::extract::Request;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Content security policy.
///
/// `data:` images are allowed because the favicon is a `data:` URL.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; img-src 'self' data:";

/// Add the fixed security header set to every response:
///
/// * Access-Control-Allow-Methods
/// * Content-Security-Policy (parameterized)
/// * Cross-Origin-Opener-Policy
/// * Cross-Origin-Resource-Policy
/// * Permissions-Policy
/// * Referrer-Policy
/// * X-Content-Type-Options
/// * X-Frame-Options
///
/// Because this site might be served locally or behind a reverse
/// proxy, Access-Control-Allow-Origin and Strict-Transport-Security
/// are deliberately not set.
pub async fn security_headers(csp: HeaderValue, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, HEAD, OPTIONS"),
    );
    headers.insert(header::CONTENT_SECURITY_POLICY, csp);
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("cross-origin-resource-policy"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "camera=(), geolocation=(), gyroscope=(), magnetometer=(), \
             microphone=(), midi=(), payment=(), usb=()",
        ),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );

    response
}

/// Convert a panic caught by `CatchPanicLayer` into the same JSON 500
/// body the typed error path produces.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("request handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "an internal error occurred"
        })),
    )
        .into_response()
}
