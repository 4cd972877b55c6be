//! HTTP surface: router assembly, middleware stack, and the server
//! loop.

pub mod error;
pub mod middleware;
pub mod routes;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{from_fn, Next};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use middleware::{handle_panic, security_headers, CONTENT_SECURITY_POLICY};

/// Directory served for all routes the API does not claim.
const PUBLIC_DIR: &str = "public";

/// Build the application router.
///
/// Middleware, outermost first: request tracing, security headers,
/// panic recovery, compression. Headers sit outside panic recovery so
/// recovered 500s still carry them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(|req: Request, next: Next| {
            security_headers(HeaderValue::from_static(CONTENT_SECURITY_POLICY), req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::warn!("received SIGTERM, shutting down");
        }
    }
}
