//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url_info::UrlInfoResponse;
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/landing",
///   "expires_in_days": 7,
///   "custom_alias": "promo"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "promo",
///   "original_url": "https://example.com/landing",
///   "created_at": "2025-01-01T12:00:00Z",
///   "expires_at": "2025-01-08T12:00:00Z",
///   "click_count": 0
/// }
/// ```
///
/// # Errors
///
/// - 422 if the body is malformed or the URL is not absolute http(s)
/// - 400 if the custom alias is already taken
/// - 503 if no free random code was found
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<UrlInfoResponse>, AppError> {
    let url = state
        .url_service
        .create_short_url(payload.url, payload.expires_in_days, payload.custom_alias)
        .await?;

    tracing::info!(code = %url.short_code, "Short URL created");

    Ok(Json(url.into()))
}
