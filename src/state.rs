//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuditService, UrlService};

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub audit: AuditService,
    /// Fixed base URL for generated links; derived from request headers when unset.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, audit: AuditService) -> Self {
        Self {
            url_service,
            audit,
            public_base_url: None,
        }
    }

    pub fn with_public_base_url(mut self, base_url: Option<String>) -> Self {
        self.public_base_url = base_url;
        self
    }
}
