//! Repository trait for short URL data access.

use crate::domain::entities::UrlRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Persistence contract for the `shortener` table.
///
/// The code generator only needs [`exists`](UrlRepository::exists); request
/// handling uses the rest. The existence check is advisory: two concurrent
/// creators may pick the same code, and the unique constraint enforced by
/// [`insert`](UrlRepository::insert) is what keeps codes unique.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local fake
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns true iff a record with this short code exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on connectivity or query failure.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Stores a new mapping with `times_followed = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on any failure, including a duplicate code.
    async fn insert(&self, long_url: &str, code: &str) -> Result<(), StoreError>;

    /// Loads the record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record matches.
    async fn fetch_by_code(&self, code: &str) -> Result<UrlRecord, StoreError>;

    /// Adds one to the follow counter of a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on failure. Callers treat this as non-fatal.
    async fn increment_follow_count(&self, code: &str) -> Result<(), StoreError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
