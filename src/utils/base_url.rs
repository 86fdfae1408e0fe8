//! Caller-visible base URL resolution from HTTP request headers.

use axum::http::{HeaderMap, header};

/// Base URL used when neither configuration nor headers name one.
pub const FALLBACK_BASE_URL: &str = "http://localhost";

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Resolves the base URL short links are published under.
///
/// Priority:
/// 1. `configured` (from `PUBLIC_BASE_URL`)
/// 2. `{X-Forwarded-Proto | http}://{X-Forwarded-Host | Host}`
/// 3. [`FALLBACK_BASE_URL`]
///
/// The result never ends with a slash.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8080".parse().unwrap());
///
/// assert_eq!(resolve_base_url(None, &headers), "http://s.example.com:8080");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }

    let host = header_value(headers, FORWARDED_HOST)
        .or_else(|| header_value(headers, header::HOST.as_str()));

    let Some(host) = host else {
        return FALLBACK_BASE_URL.to_string();
    };

    let scheme = header_value(headers, FORWARDED_PROTO)
        .filter(|p| p.eq_ignore_ascii_case("http") || p.eq_ignore_ascii_case("https"))
        .map(|p| p.to_ascii_lowercase())
        .unwrap_or_else(|| "http".to_string());

    format!("{}://{}", scheme, host.trim_end_matches('/'))
}

/// Joins a base URL and a short code into the full short link.
pub fn short_link(base_url: &str, short_code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_code)
}

/// First comma-separated value of a header, trimmed; `None` if absent or empty.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
