//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    click_count: i64,
}

impl From<UrlRow> for ShortUrl {
    fn from(r: UrlRow) -> Self {
        ShortUrl {
            id: r.id,
            short_code: r.short_code,
            original_url: r.original_url,
            created_at: r.created_at,
            expires_at: r.expires_at,
            click_count: r.click_count,
        }
    }
}

/// PostgreSQL repository for short URLs.
///
/// Uses bound parameters throughout; uniqueness is enforced by the
/// `urls_short_code_key` constraint.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_code, original_url, created_at, expires_at, click_count)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING id, short_code, original_url, created_at, expires_at, click_count
            "#,
        )
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .bind(new_url.created_at)
        .bind(new_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(InsertOutcome::Created(row.into())),
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertOutcome::CodeTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, short_code, original_url, created_at, expires_at, click_count
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<i64>, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE urls
            SET click_count = click_count + 1
            WHERE short_code = $1
            RETURNING click_count
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
