//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;

/// Row shape of the `shortener` table.
#[derive(sqlx::FromRow)]
struct ShortenerRow {
    id: i64,
    short_url: String,
    long_url: String,
    times_followed: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortenerRow> for UrlRecord {
    fn from(row: ShortenerRow) -> Self {
        UrlRecord::new(
            row.id,
            row.short_url,
            row.long_url,
            row.times_followed,
            row.created_at,
        )
    }
}

/// PostgreSQL repository backed by the `shortener` table.
///
/// Uses bound parameters for every query. The pool is owned by the
/// composition root and shared through an [`Arc`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Counts stored links.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shortener")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    /// Sums `times_followed` over all links.
    pub async fn total_follows(&self) -> Result<i64, StoreError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(times_followed), 0)::BIGINT FROM shortener",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(total)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM shortener WHERE short_url = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn insert(&self, long_url: &str, code: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO shortener (long_url, short_url) VALUES ($1, $2)")
            .bind(long_url)
            .bind(code)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| match StoreError::from(e) {
                err if err.is_unique_violation() => StoreError::duplicate(code),
                err => err,
            })?;

        Ok(())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<UrlRecord, StoreError> {
        let row = sqlx::query_as::<_, ShortenerRow>(
            r#"
            SELECT id, short_url, long_url, times_followed, created_at
            FROM shortener
            WHERE short_url = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlRecord::from)
            .ok_or_else(|| StoreError::not_found(code))
    }

    async fn increment_follow_count(&self, code: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE shortener
            SET times_followed = times_followed + 1
            WHERE short_url = $1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(code));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
