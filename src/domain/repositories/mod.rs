//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short URL storage, lookup and click counting
//! - [`ErrorLogRepository`] - Error audit trail

pub mod error_log_repository;
pub mod url_repository;

pub use error_log_repository::ErrorLogRepository;
pub use url_repository::{InsertOutcome, UrlRepository};

#[cfg(test)]
pub use error_log_repository::MockErrorLogRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
