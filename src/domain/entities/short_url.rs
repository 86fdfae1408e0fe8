//! Short URL entity representing a code-to-destination mapping.

use chrono::{DateTime, Utc};

/// Longest short code the store accepts.
pub const MAX_SHORT_CODE_LEN: usize = 32;

/// Path segments mounted ahead of `/{code}`; a short code equal to one of
/// these could never be redirected.
pub const RESERVED_SHORT_CODES: &[&str] = &["static"];

/// Returns true if `code` is shadowed by a mounted route prefix.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_SHORT_CODES.contains(&code)
}

/// A shortened URL with its click counter.
///
/// Records are immutable after creation except for `click_count`, which only
/// ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl ShortUrl {
    /// Returns true if the link had expired at `now`.
    ///
    /// A link whose expiry equals `now` is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortUrl {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewShortUrl {
    /// Materializes the record the store would return for this input.
    pub fn into_short_url(self, id: i64) -> ShortUrl {
        ShortUrl {
            id,
            short_code: self.short_code,
            original_url: self.original_url,
            created_at: self.created_at,
            expires_at: self.expires_at,
            click_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(expires_at: Option<DateTime<Utc>>) -> ShortUrl {
        NewShortUrl {
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            created_at: Utc::now(),
            expires_at,
        }
        .into_short_url(1)
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved_code("static"));
        assert!(!is_reserved_code("Static"));
        assert!(!is_reserved_code("api"));
        assert!(!is_reserved_code("abc123"));
    }

    #[test]
    fn test_never_expires_without_expiry() {
        let url = sample(None);

        assert!(!url.is_expired());
        assert!(!url.is_expired_at(Utc::now() + Duration::days(36500)));
    }

    #[test]
    fn test_expired_in_the_past() {
        let url = sample(Some(Utc::now() - Duration::hours(1)));
        assert!(url.is_expired());
    }

    #[test]
    fn test_not_expired_in_the_future() {
        let url = sample(Some(Utc::now() + Duration::days(1)));
        assert!(!url.is_expired());
    }

    #[test]
    fn test_expired_at_exact_instant() {
        let now = Utc::now();
        let url = sample(Some(now));

        assert!(url.is_expired_at(now));
        assert!(!url.is_expired_at(now - Duration::milliseconds(1)));
    }

    #[test]
    fn test_into_short_url_starts_with_zero_clicks() {
        let url = sample(None);

        assert_eq!(url.id, 1);
        assert_eq!(url.click_count, 0);
        assert_eq!(url.short_code, "abc123");
    }
}
