//! URL record returned by the shorten and stats endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

#[derive(Debug, Serialize)]
pub struct UrlInfoResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl From<ShortUrl> for UrlInfoResponse {
    fn from(url: ShortUrl) -> Self {
        Self {
            short_code: url.short_code,
            original_url: url.original_url,
            created_at: url.created_at,
            expires_at: url.expires_at,
            click_count: url.click_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_null_expiry() {
        let url = ShortUrl {
            id: 9,
            short_code: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            created_at: Utc::now(),
            expires_at: None,
            click_count: 2,
        };

        let value = serde_json::to_value(UrlInfoResponse::from(url)).unwrap();

        assert_eq!(value["short_code"], "abc123");
        assert_eq!(value["click_count"], 2);
        assert!(value["expires_at"].is_null());
        assert!(value.get("id").is_none());
    }
}
