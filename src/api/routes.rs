//! API route configuration.

use crate::api::handlers::{health_handler, qr_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a short URL
/// - `GET  /stats/{code}` - Stored record and click count
/// - `GET  /qr/{code}`    - PNG QR code of the short link
/// - `GET  /health`       - Database and audit queue checks
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/qr/{code}", get(qr_handler))
        .route("/health", get(health_handler))
}
