//! Domain layer containing business entities and repository contracts.
//!
//! Nothing in here depends on the web layer. Repository methods report
//! [`crate::error::StoreError`], which can carry an `sqlx::Error` from the
//! PostgreSQL adapter.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions implemented by
//!   [`crate::infrastructure::persistence`]

pub mod entities;
pub mod repositories;
