mod common;

use chrono::{Duration, Utc};
use snaplink::utils::qr::render_png;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[tokio::test]
async fn test_qr_encodes_configured_base_url() {
    let (state, _rx, repo) = common::create_test_state();
    repo.seed("qr1", "https://example.com", None);

    let state = state.with_public_base_url(Some("https://s.example.com".to_string()));
    let server = common::test_server(state);

    let response = server.get("/api/qr/qr1").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");

    let bytes = response.as_bytes();
    assert!(bytes.starts_with(PNG_SIGNATURE));
    assert_eq!(
        bytes.as_ref(),
        render_png("https://s.example.com/qr1").unwrap().as_slice()
    );
}

#[tokio::test]
async fn test_qr_uses_forwarded_headers() {
    let (state, _rx, repo) = common::create_test_state();
    repo.seed("qr2", "https://example.com", None);

    let server = common::test_server(state);

    let response = server
        .get("/api/qr/qr2")
        .add_header("X-Forwarded-Proto", "https")
        .add_header("X-Forwarded-Host", "links.example.net")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.as_bytes().as_ref(),
        render_png("https://links.example.net/qr2").unwrap().as_slice()
    );
}

#[tokio::test]
async fn test_qr_does_not_count_clicks() {
    let (state, _rx, repo) = common::create_test_state();
    repo.seed("qr3", "https://example.com", None);

    let server = common::test_server(state);

    server.get("/api/qr/qr3").await.assert_status_ok();

    assert_eq!(repo.get("qr3").unwrap().click_count, 0);
}

#[tokio::test]
async fn test_qr_not_found() {
    let (state, mut rx, _repo) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/api/qr/missing").await;

    response.assert_status_not_found();

    let events = common::drain_audit(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].path, "/api/qr/missing");
}

#[tokio::test]
async fn test_qr_expired() {
    let (state, _rx, repo) = common::create_test_state();
    repo.seed(
        "gone",
        "https://example.com",
        Some(Utc::now() - Duration::minutes(5)),
    );

    let server = common::test_server(state);

    let response = server.get("/api/qr/gone").await;

    assert_eq!(response.status_code(), 410);
}
