//! Collision-checked short code generation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::repositories::UrlRepository;
use crate::error::GenerationError;
use crate::utils::code_generator::random_code;

/// Upper bound on generation attempts per call.
pub const MAX_ATTEMPTS: usize = 10;

/// Produces short codes that were not in the store at check time.
///
/// Each call samples a random code, asks the repository whether it exists
/// and retries on collision, up to [`MAX_ATTEMPTS`] times. A failing
/// existence check aborts immediately. The generator keeps no state between
/// calls and can be shared freely across tasks.
pub struct CodeGenerator<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> CodeGenerator<R> {
    /// Creates a generator checking collisions against `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Generates a code that no stored record currently uses.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Store`] if an existence check fails (after exactly one failing check)
    /// - [`GenerationError::Exhausted`] after [`MAX_ATTEMPTS`] collisions
    pub async fn generate(&self) -> Result<String, GenerationError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = random_code();

            let taken = self
                .repository
                .exists(&code)
                .await
                .map_err(GenerationError::Store)?;

            if !taken {
                return Ok(code);
            }

            metrics::counter!("code_collisions_total").increment(1);
            debug!(attempt, code = %code, "short code collision, retrying");
        }

        warn!(
            attempts = MAX_ATTEMPTS,
            "giving up on short code generation"
        );
        Err(GenerationError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
