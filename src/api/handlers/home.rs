//! Home page handler.

use axum::response::IntoResponse;

use crate::api::templates::IndexTemplate;

/// Renders the empty shortening form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    IndexTemplate::default()
}
