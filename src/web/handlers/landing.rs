//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a shorten form plus result panels for the
/// short link, its stats and its QR code. All data is fetched from `/api`
/// by `static/app.js`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct LandingTemplate {
    version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler() -> impl IntoResponse {
    LandingTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
