#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::mpsc;

use snaplink::application::services::{AuditService, UrlService};
use snaplink::domain::audit_event::AuditEvent;
use snaplink::domain::entities::{NewShortUrl, ShortUrl};
use snaplink::domain::repositories::{InsertOutcome, UrlRepository};
use snaplink::error::AppError;
use snaplink::routes::app_router;
use snaplink::state::AppState;

/// Short URL store backed by a map, honoring code uniqueness like the
/// `urls_short_code_key` constraint.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: Mutex<HashMap<String, ShortUrl>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, code: &str, url: &str, expires_at: Option<DateTime<Utc>>) -> ShortUrl {
        let record = ShortUrl {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            short_code: code.to_string(),
            original_url: url.to_string(),
            created_at: Utc::now(),
            expires_at,
            click_count: 0,
        };
        self.urls
            .lock()
            .unwrap()
            .insert(code.to_string(), record.clone());
        record
    }

    pub fn get(&self, code: &str) -> Option<ShortUrl> {
        self.urls.lock().unwrap().get(code).cloned()
    }

    pub fn len(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<InsertOutcome, AppError> {
        let mut urls = self.urls.lock().unwrap();
        if urls.contains_key(&new_url.short_code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = new_url.into_short_url(id);
        urls.insert(record.short_code.clone(), record.clone());
        Ok(InsertOutcome::Created(record))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.get(short_code))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<i64>, AppError> {
        let mut urls = self.urls.lock().unwrap();
        Ok(urls.get_mut(short_code).map(|url| {
            url.click_count += 1;
            url.click_count
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every call fails like a dropped database connection.
pub struct FailingUrlRepository;

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn insert(&self, _new_url: NewShortUrl) -> Result<InsertOutcome, AppError> {
        Err(AppError::internal("Database error: connection refused"))
    }

    async fn find_by_code(&self, _short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        Err(AppError::internal("Database error: connection refused"))
    }

    async fn increment_clicks(&self, _short_code: &str) -> Result<Option<i64>, AppError> {
        Err(AppError::internal("Database error: connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("Database error: connection refused"))
    }
}

pub fn create_state_with(
    repository: Arc<dyn UrlRepository>,
    audit_capacity: usize,
) -> (AppState, mpsc::Receiver<AuditEvent>) {
    let (tx, rx) = mpsc::channel(audit_capacity);

    let url_service = Arc::new(UrlService::new(repository));
    let state = AppState::new(url_service, AuditService::new(tx));

    (state, rx)
}

pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<AuditEvent>,
    Arc<InMemoryUrlRepository>,
) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let (state, rx) = create_state_with(repo.clone(), 100);

    (state, rx, repo)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

/// Collects every audit event queued so far.
pub fn drain_audit(rx: &mut mpsc::Receiver<AuditEvent>) -> Vec<AuditEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
