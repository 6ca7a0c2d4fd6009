//! Server-rendered pages.

use askama::Template;
use askama_web::WebTemplate;

/// The home page: shortening form, plus either the created link or an error.
///
/// Renders `templates/index.html`.
#[derive(Debug, Default, Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub error: Option<String>,
    pub short_url: Option<String>,
}

impl IndexTemplate {
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            short_url: None,
        }
    }

    pub fn with_short_url(short_url: impl Into<String>) -> Self {
        Self {
            error: None,
            short_url: Some(short_url.into()),
        }
    }
}
