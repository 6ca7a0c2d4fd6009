//! Form payload of the shortening endpoint.

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /`, sent as `application/x-www-form-urlencoded`.
///
/// A missing `long_url` field deserializes to an empty string so it is
/// reported as a missing URL rather than a malformed form.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlForm {
    /// The URL to shorten. Only emptiness is checked.
    #[serde(default)]
    #[validate(length(min = 1, message = "Enter long url to shorten"))]
    pub long_url: String,
}
