//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Short URL storage, lookup and click counting
//! - [`PgErrorLogRepository`] - Error audit trail

pub mod pg_error_log_repository;
pub mod pg_url_repository;

pub use pg_error_log_repository::PgErrorLogRepository;
pub use pg_url_repository::PgUrlRepository;

use sqlx::PgPool;

/// Creates the `urls` and `error_logs` tables if they do not exist.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
