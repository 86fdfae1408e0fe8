//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt.
///
/// A taken code is an expected outcome, not an error: the unique constraint
/// on `short_code` is the source of truth for collisions.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    Created(ShortUrl),
    CodeTaken,
}

/// Repository interface for short URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// Returns [`InsertOutcome::CodeTaken`] when the short code violates the
    /// uniqueness constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any other database error.
    async fn insert(&self, new_url: NewShortUrl) -> Result<InsertOutcome, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Atomically increments the click counter.
    ///
    /// Returns the new count, or `None` if no record has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<i64>, AppError>;

    /// Round-trips to the store.
    async fn ping(&self) -> Result<(), AppError>;
}
