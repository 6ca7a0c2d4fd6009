//! Link creation and redirect resolution.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::CodeGenerator;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StoreError};

/// Service behind the create and redirect endpoints.
///
/// Owns a [`CodeGenerator`] sharing the same repository handle.
pub struct LinkService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    generator: CodeGenerator<R>,
}

impl<R: UrlRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        let generator = CodeGenerator::new(repository.clone());
        Self {
            repository,
            generator,
        }
    }

    /// Stores `long_url` under a freshly generated code and returns the code.
    ///
    /// The URL is only checked for emptiness; its shape is not validated.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `long_url` is empty or whitespace; the generator is not called
    /// - [`AppError::Generation`] if no free code could be produced
    /// - [`AppError::Store`] if the insert fails, including a lost race on the unique code
    pub async fn create_short_link(&self, long_url: &str) -> Result<String, AppError> {
        let long_url = long_url.trim();
        if long_url.is_empty() {
            return Err(AppError::validation("Enter long url to shorten"));
        }

        let code = self.generator.generate().await?;

        if let Err(e) = self.repository.insert(long_url, &code).await {
            if e.is_unique_violation() {
                warn!(code = %code, "short code was taken between check and insert");
            }
            return Err(AppError::Store(e));
        }

        metrics::counter!("links_created_total").increment(1);
        info!(code = %code, long_url = %long_url, "short link created");

        Ok(code)
    }

    /// Returns the long URL for `code` and counts the visit.
    ///
    /// The follow counter is updated on a best-effort basis: if the update
    /// fails the failure is logged and the URL is still returned.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no record matches; the counter is not touched
    /// - [`AppError::Store`] if the lookup itself fails
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let record = self.repository.fetch_by_code(code).await?;

        if let Err(e) = self.repository.increment_follow_count(code).await {
            metrics::counter!("follow_count_failures_total").increment(1);
            warn!(code = %code, error = %e, "failed to update times_followed");
        }

        metrics::counter!("redirects_total").increment(1);
        info!(code = %code, long_url = %record.long_url, "redirecting");

        Ok(record.long_url)
    }

    /// Returns the stored record without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn get_record(&self, code: &str) -> Result<UrlRecord, AppError> {
        Ok(self.repository.fetch_by_code(code).await?)
    }

    /// Checks that the backing store answers.
    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }

    /// Composes the absolute short URL from a public origin and a code.
    pub fn get_short_url(&self, origin: &str, code: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), code)
    }
}
