//! Stored mapping between a short code and a long URL.

use chrono::{DateTime, Utc};

/// A shortened URL with its follow counter.
///
/// `id` and `created_at` are assigned by the store on insert. `short_code`
/// never changes after creation and `times_followed` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub times_followed: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        times_followed: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            times_followed,
            created_at,
        }
    }
}
