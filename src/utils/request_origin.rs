//! Public origin (`scheme://host`) extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the origin the client used to reach the service.
///
/// The host comes from the `Host` header and keeps its port, so links
/// created on `localhost:8081` point back to `localhost:8081`. The scheme
/// comes from `X-Forwarded-Proto` when a TLS-terminating proxy sets it,
/// otherwise `http`. Only the first value of a comma-separated
/// `X-Forwarded-Proto` list is used, and only `http`/`https` are accepted.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8081".parse().unwrap());
///
/// assert_eq!(extract_origin_from_headers(&headers).unwrap(), "http://sho.rt:8081");
/// ```
pub fn extract_origin_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::validation("Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::validation("Invalid Host header"))?
        .trim();

    if host.is_empty() {
        return Err(AppError::validation("Missing Host header"));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}
