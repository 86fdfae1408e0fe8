//! Repository trait for the error audit trail.

use crate::domain::entities::{ErrorLog, NewErrorLog};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store for error-log records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorLogRepository: Send + Sync {
    /// Appends one record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, entry: NewErrorLog) -> Result<ErrorLog, AppError>;
}
