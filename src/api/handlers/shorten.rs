//! Handler for the shortening form.

use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::warn;
use validator::Validate;

use crate::api::dto::shorten::UrlForm;
use crate::api::templates::IndexTemplate;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::extract_origin_from_headers;

const INVALID_INPUT: &str = "Invalid input. Please enter your url.";

/// Creates a short link and renders it on the home page.
///
/// # Endpoint
///
/// `POST /` with form field `long_url`
///
/// # Responses
///
/// - **200 OK**: page showing `scheme://host/code`
/// - **400 Bad Request**: unreadable form, empty URL or missing `Host`
/// - **500 Internal Server Error**: no free code could be generated, or the insert failed
///
/// Errors are rendered into the same page so the user can retry.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<UrlForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!(error = %rejection, "rejected shorten form");
            return (
                StatusCode::BAD_REQUEST,
                IndexTemplate::with_error(INVALID_INPUT),
            )
                .into_response();
        }
    };

    match create(&state, &headers, form).await {
        Ok(short_url) => IndexTemplate::with_short_url(short_url).into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!(error = %err, "failed to create short link");
            }
            (err.status_code(), IndexTemplate::with_error(err.user_message())).into_response()
        }
    }
}

async fn create(state: &AppState, headers: &HeaderMap, form: UrlForm) -> Result<String, AppError> {
    form.validate()
        .map_err(|_| AppError::validation("Enter long url to shorten"))?;

    let origin = extract_origin_from_headers(headers)?;
    let code = state.link_service.create_short_link(&form.long_url).await?;

    Ok(state.link_service.get_short_url(&origin, &code))
}
