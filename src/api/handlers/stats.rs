//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::url_info::UrlInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code, including its click count.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Expired links are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let url = state.url_service.get_stats(&code).await?;

    Ok(Json(url.into()))
}
