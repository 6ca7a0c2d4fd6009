//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::UrlRepository;

/// Handler state built once by the composition root.
///
/// The repository behind [`LinkService`] is a trait object, so the same
/// router runs on PostgreSQL in production and on the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn UrlRepository>>,
}

impl AppState {
    /// Builds the state around a repository handle.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
        }
    }
}
