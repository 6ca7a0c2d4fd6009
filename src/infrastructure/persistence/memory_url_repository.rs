//! Process-local implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: HashMap<String, UrlRecord>,
    /// URL another writer stores under the next inserted code.
    interloper: Option<String>,
}

impl Table {
    fn push(&mut self, code: &str, long_url: &str) {
        self.next_id += 1;
        let record = UrlRecord::new(
            self.next_id,
            code.to_string(),
            long_url.to_string(),
            0,
            Utc::now(),
        );
        self.rows.insert(code.to_string(), record);
    }
}

/// In-memory repository with the same semantics as the PostgreSQL one.
///
/// Duplicate codes are rejected on insert with [`StoreError::Duplicate`],
/// ids and timestamps are assigned on insert. Outages can be simulated with
/// [`set_available`], [`fail_inserts`] and [`fail_increments`], and a
/// concurrent creator with [`race_next_insert`].
///
/// [`set_available`]: InMemoryUrlRepository::set_available
/// [`race_next_insert`]: InMemoryUrlRepository::race_next_insert
/// [`fail_inserts`]: InMemoryUrlRepository::fail_inserts
/// [`fail_increments`]: InMemoryUrlRepository::fail_increments
#[derive(Default)]
pub struct InMemoryUrlRepository {
    table: Mutex<Table>,
    unavailable: AtomicBool,
    failing_inserts: AtomicBool,
    failing_increments: AtomicBool,
    exists_calls: AtomicUsize,
    increment_calls: AtomicUsize,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// When `false`, every operation fails with [`StoreError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// When `true`, only [`UrlRepository::insert`] fails.
    pub fn fail_inserts(&self, failing: bool) {
        self.failing_inserts.store(failing, Ordering::SeqCst);
    }

    /// When `true`, only [`UrlRepository::increment_follow_count`] fails.
    pub fn fail_increments(&self, failing: bool) {
        self.failing_increments.store(failing, Ordering::SeqCst);
    }

    /// Makes the next insert lose a race: just before it runs, another
    /// writer stores `long_url` under the same code.
    pub fn race_next_insert(&self, long_url: impl Into<String>) {
        self.lock().interloper = Some(long_url.into());
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of existence checks served so far.
    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    /// Number of follow-count increments attempted so far.
    pub fn increment_calls(&self) -> usize {
        self.increment_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.lock().rows.contains_key(code))
    }

    async fn insert(&self, long_url: &str, code: &str) -> Result<(), StoreError> {
        self.check_available()?;

        if self.failing_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("insert rejected".into()));
        }

        let mut table = self.lock();
        if let Some(other_url) = table.interloper.take() {
            table.push(code, &other_url);
        }
        if table.rows.contains_key(code) {
            return Err(StoreError::duplicate(code));
        }

        table.push(code, long_url);
        Ok(())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<UrlRecord, StoreError> {
        self.check_available()?;
        self.lock()
            .rows
            .get(code)
            .cloned()
            .ok_or_else(|| StoreError::not_found(code))
    }

    async fn increment_follow_count(&self, code: &str) -> Result<(), StoreError> {
        self.increment_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        if self.failing_increments.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("counter update rejected".into()));
        }

        let mut table = self.lock();
        let record = table
            .rows
            .get_mut(code)
            .ok_or_else(|| StoreError::not_found(code))?;
        record.times_followed += 1;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_fetch() {
        let repo = InMemoryUrlRepository::new();
        repo.insert("https://example.com", "abc1234").await.unwrap();

        let record = repo.fetch_by_code("abc1234").await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.long_url, "https://example.com");
        assert_eq!(record.times_followed, 0);
        assert!(repo.exists("abc1234").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_fails() {
        let repo = InMemoryUrlRepository::new();
        repo.insert("https://a.com", "dup0001").await.unwrap();

        let err = repo.insert("https://b.com", "dup0001").await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert!(err.is_unique_violation());
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.fetch_by_code("dup0001").await.unwrap().long_url,
            "https://a.com"
        );
    }

    #[tokio::test]
    async fn test_race_next_insert_loses_to_other_writer() {
        let repo = InMemoryUrlRepository::new();
        repo.race_next_insert("https://other.example");

        assert!(!repo.exists("race001").await.unwrap());
        let err = repo.insert("https://mine.example", "race001").await.unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(
            repo.fetch_by_code("race001").await.unwrap().long_url,
            "https://other.example"
        );

        repo.insert("https://mine.example", "next001").await.unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let repo = InMemoryUrlRepository::new();
        let result = repo.fetch_by_code("missing").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_increment() {
        let repo = InMemoryUrlRepository::new();
        repo.insert("https://example.com", "cnt0001").await.unwrap();
        repo.increment_follow_count("cnt0001").await.unwrap();
        repo.increment_follow_count("cnt0001").await.unwrap();

        let record = repo.fetch_by_code("cnt0001").await.unwrap();
        assert_eq!(record.times_followed, 2);
        assert_eq!(repo.increment_calls(), 2);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let repo = InMemoryUrlRepository::new();
        repo.set_available(false);

        assert!(matches!(
            repo.exists("abc").await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(repo.ping().await.is_err());
        assert_eq!(repo.exists_calls(), 1);

        repo.set_available(true);
        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_increments_leave_counter_untouched() {
        let repo = InMemoryUrlRepository::new();
        repo.insert("https://example.com", "keep000").await.unwrap();
        repo.fail_increments(true);

        assert!(repo.increment_follow_count("keep000").await.is_err());
        assert_eq!(
            repo.fetch_by_code("keep000").await.unwrap().times_followed,
            0
        );
    }
}
