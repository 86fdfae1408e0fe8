//! PostgreSQL implementation of the error-log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ErrorLog, NewErrorLog};
use crate::domain::repositories::ErrorLogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ErrorLogRow {
    id: i64,
    path: String,
    method: String,
    status_code: i32,
    detail: String,
    created_at: DateTime<Utc>,
}

/// Append-only PostgreSQL store for error responses.
pub struct PgErrorLogRepository {
    pool: Arc<PgPool>,
}

impl PgErrorLogRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ErrorLogRepository for PgErrorLogRepository {
    async fn insert(&self, entry: NewErrorLog) -> Result<ErrorLog, AppError> {
        let row = sqlx::query_as::<_, ErrorLogRow>(
            r#"
            INSERT INTO error_logs (path, method, status_code, detail, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, path, method, status_code, detail, created_at
            "#,
        )
        .bind(entry.path)
        .bind(entry.method)
        .bind(entry.status_code)
        .bind(entry.detail)
        .bind(entry.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ErrorLog {
            id: row.id,
            path: row.path,
            method: row.method,
            status_code: row.status_code,
            detail: row.detail,
            created_at: row.created_at,
        })
    }
}
