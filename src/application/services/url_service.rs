//! Short URL creation, lookup and click counting.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::entities::{MAX_SHORT_CODE_LEN, NewShortUrl, ShortUrl, is_reserved_code};
use crate::domain::repositories::{InsertOutcome, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};

/// Attempts at finding a free random code before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Service for creating and resolving short URLs.
///
/// Holds the repository behind a trait object so the HTTP layer can be
/// exercised against in-memory stores.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    code_length: usize,
    max_attempts: u32,
}

impl UrlService {
    /// Creates a service with the default code length and retry budget.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self {
            repository,
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the generated code length and the collision retry budget.
    pub fn with_code_policy(mut self, code_length: usize, max_attempts: u32) -> Self {
        self.code_length = code_length;
        self.max_attempts = max_attempts;
        self
    }

    /// Creates a short URL.
    ///
    /// # Code Selection
    ///
    /// - `custom_alias` is trimmed; an alias that is empty after trimming
    ///   counts as absent
    /// - A taken alias fails with [`AppError::AliasConflict`], whether it is
    ///   seen by the lookup or by the insert
    /// - Otherwise random codes are inserted until one is accepted, up to
    ///   `max_attempts` times
    ///
    /// # Expiration
    ///
    /// See [`compute_expiry`].
    ///
    /// # Errors
    ///
    /// - [`AppError::AliasConflict`] if the alias is taken
    /// - [`AppError::ExhaustedRetries`] if every generated code collided
    /// - [`AppError::Validation`] if the alias is too long or the expiry overflows
    /// - [`AppError::Internal`] on store errors
    pub async fn create_short_url(
        &self,
        destination_url: String,
        expires_in_days: Option<i64>,
        custom_alias: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        let now = Utc::now();
        let expires_at = compute_expiry(now, expires_in_days)?;

        let alias = custom_alias
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        match alias {
            Some(alias) => {
                self.create_with_alias(alias, destination_url, now, expires_at)
                    .await
            }
            None => {
                self.create_with_random_code(destination_url, now, expires_at)
                    .await
            }
        }
    }

    async fn create_with_alias(
        &self,
        alias: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortUrl, AppError> {
        if alias.chars().count() > MAX_SHORT_CODE_LEN {
            return Err(AppError::invalid(
                &["body", "custom_alias"],
                format!("Custom alias must be at most {MAX_SHORT_CODE_LEN} characters"),
                "string_too_long",
            ));
        }

        if is_reserved_code(&alias) {
            return Err(AppError::invalid(
                &["body", "custom_alias"],
                "Custom alias is reserved",
                "reserved_alias",
            ));
        }

        if self.repository.find_by_code(&alias).await?.is_some() {
            return Err(AppError::AliasConflict { alias });
        }

        let new_url = NewShortUrl {
            short_code: alias.clone(),
            original_url,
            created_at,
            expires_at,
        };

        match self.repository.insert(new_url).await? {
            InsertOutcome::Created(url) => Ok(url),
            InsertOutcome::CodeTaken => Err(AppError::AliasConflict { alias }),
        }
    }

    async fn create_with_random_code(
        &self,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ShortUrl, AppError> {
        for attempt in 1..=self.max_attempts {
            let short_code = generate_code(self.code_length);
            if is_reserved_code(&short_code) {
                tracing::debug!(attempt, "Generated short code is reserved, retrying");
                continue;
            }

            let new_url = NewShortUrl {
                short_code,
                original_url: original_url.clone(),
                created_at,
                expires_at,
            };

            match self.repository.insert(new_url).await? {
                InsertOutcome::Created(url) => return Ok(url),
                InsertOutcome::CodeTaken => {
                    tracing::debug!(attempt, "Generated short code collided, retrying");
                }
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    /// Looks up a record without an expiration check.
    ///
    /// Expired links still report their stats.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get_stats(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Looks up a record that is still live.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown and
    /// [`AppError::Expired`] if it has expired. Expired records are left in place.
    pub async fn get_live(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        let url = self.get_stats(short_code).await?;

        if url.is_expired() {
            return Err(AppError::Expired);
        }

        Ok(url)
    }

    /// Resolves a code for redirection and counts the click.
    ///
    /// Returns the record with its updated `click_count`.
    ///
    /// # Errors
    ///
    /// See [`Self::get_live`].
    pub async fn resolve(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        let mut url = self.get_live(short_code).await?;

        url.click_count = self
            .repository
            .increment_clicks(short_code)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(url)
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Computes `expires_at` for a link created at `now`.
///
/// - `Some(days)` with `days > 0`: `now + days`
/// - `Some(0)`: `now`, so the link is expired as soon as it exists
/// - `None` or a negative count: never expires
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the timestamp would overflow.
pub fn compute_expiry(
    now: DateTime<Utc>,
    expires_in_days: Option<i64>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(days) = expires_in_days.filter(|d| *d >= 0) else {
        return Ok(None);
    };

    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(Some)
        .ok_or_else(|| {
            AppError::invalid(
                &["body", "expires_in_days"],
                "expires_in_days is out of range",
                "value_error",
            )
        })
}
