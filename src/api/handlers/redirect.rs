//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Each successful redirect increments the click count by one and answers
/// `307 Temporary Redirect`.
///
/// # Errors
///
/// - 404 if the short code doesn't exist
/// - 410 if the link has expired; the click is not counted
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.url_service.resolve(&code).await?;

    tracing::debug!(%code, clicks = url.click_count, "Redirecting");

    Ok(Redirect::temporary(&url.original_url))
}
