//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL creation, resolution and stats
//! - [`services::audit_service::AuditService`] - Non-blocking error audit queue

pub mod services;
