//! Fallback for unmatched routes.

use crate::error::AppError;

/// Answers unknown paths with 404 through the regular error path, so they
/// are logged and audited like any other error.
pub async fn fallback_handler() -> AppError {
    AppError::RouteNotFound
}
