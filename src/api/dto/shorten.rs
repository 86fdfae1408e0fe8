//! DTOs for link shortening endpoint.

use serde::Deserialize;
use url::Url;
use validator::{Validate, ValidationError};

use crate::domain::entities::{MAX_SHORT_CODE_LEN, is_reserved_code};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Absolute `http`/`https` destination.
    #[validate(custom(function = "validate_destination_url"))]
    pub url: String,

    /// Days until the link expires. `0` expires it immediately; negative or
    /// absent never expires.
    #[serde(default)]
    pub expires_in_days: Option<i64>,

    /// Caller-chosen short code, trimmed before use.
    #[serde(default)]
    #[validate(custom(function = "validate_alias"))]
    pub custom_alias: Option<String>,
}

fn validate_destination_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value)
        .map_err(|_| ValidationError::new("url").with_message("Invalid URL format".into()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(
            ValidationError::new("url_scheme").with_message("URL scheme must be http or https".into())
        );
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::new("url").with_message("URL must include a host".into()));
    }

    Ok(())
}

fn validate_alias(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > MAX_SHORT_CODE_LEN {
        return Err(ValidationError::new("string_too_long").with_message(
            format!("Custom alias must be at most {MAX_SHORT_CODE_LEN} characters").into(),
        ));
    }

    if is_reserved_code(value.trim()) {
        return Err(ValidationError::new("reserved_alias")
            .with_message("Custom alias is reserved".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = request(json!({
            "url": "https://example.com/some/path?q=1",
            "expires_in_days": 3,
            "custom_alias": "promo"
        }));

        assert!(req.validate().is_ok());
        assert_eq!(req.expires_in_days, Some(3));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let req = request(json!({ "url": "http://example.com" }));

        assert!(req.validate().is_ok());
        assert!(req.expires_in_days.is_none());
        assert!(req.custom_alias.is_none());
    }

    #[test]
    fn test_rejects_relative_url() {
        let req = request(json!({ "url": "not-a-valid-url" }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let req = request(json!({ "url": "ftp://example.com/file" }));

        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors()["url"][0].code, "url_scheme");
    }

    #[test]
    fn test_rejects_long_alias() {
        let req = request(json!({
            "url": "https://example.com",
            "custom_alias": "x".repeat(33)
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("custom_alias"));
    }

    #[test]
    fn test_rejects_reserved_alias() {
        let req = request(json!({ "url": "https://example.com", "custom_alias": " static " }));

        let errors = req.validate().unwrap_err();
        let field = &errors.field_errors()["custom_alias"];
        assert_eq!(field[0].code, "reserved_alias");
    }

    #[test]
    fn test_alias_length_counts_trimmed_value() {
        let padded = format!("  {}  ", "x".repeat(32));
        let req = request(json!({ "url": "https://example.com", "custom_alias": padded }));

        assert!(req.validate().is_ok());
    }
}
