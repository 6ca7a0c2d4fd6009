//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Shortening form
//! - `POST /`          - Create a short link (form field `long_url`)
//! - `GET  /health`    - Health check
//! - `GET  /{code}`    - Short link redirect
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, home_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}

/// Routes and layers without path normalization.
///
/// Exposed separately because a plain [`Router`] is what test servers accept.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home_handler).post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
