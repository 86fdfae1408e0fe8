//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page
//! - `GET  /{code}`    - Short link redirect
//! - `/api/*`          - JSON API
//! - `/static/*`       - Static assets
//! - anything else     - 404 through the error path
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Error audit** - Logs and queues every error response
//! - **Panic catcher** - Turns handler panics into 500 responses

use crate::api;
use crate::api::handlers::{fallback_handler, redirect_handler};
use crate::api::middleware::{error_audit, panic, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    error_audit::layer,
                ))
                .layer(panic::layer()),
        )
        .with_state(state)
}
