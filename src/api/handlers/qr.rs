//! Handler for QR code images.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{resolve_base_url, short_link};
use crate::utils::qr::render_png;

/// Renders the full short link for a code as a PNG QR code.
///
/// # Endpoint
///
/// `GET /api/qr/{code}`
///
/// The link is built from `PUBLIC_BASE_URL` when configured, otherwise from
/// the request's forwarding or `Host` headers. Clicks are not counted.
///
/// # Errors
///
/// - 404 if the short code doesn't exist
/// - 410 if the link has expired
pub async fn qr_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.get_live(&code).await?;

    let base_url = resolve_base_url(state.public_base_url.as_deref(), &headers);
    let png = render_png(&short_link(&base_url, &url.short_code))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
