//! Audit event model for asynchronous error logging.

use chrono::{DateTime, Utc};

use crate::domain::entities::NewErrorLog;

/// Longest method name the `error_logs.method` column accepts.
const MAX_METHOD_LEN: usize = 10;

/// An in-memory record of one error response, queued for persistence.
///
/// Created by the error-audit middleware after the response is built and
/// handed to [`crate::domain::audit_worker::run_audit_worker`] through a
/// bounded channel, so the store write never sits on the response path.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    pub path: String,
    pub method: String,
    pub status_code: u16,
    pub detail: String,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(
        path: impl Into<String>,
        method: impl Into<String>,
        status_code: u16,
        detail: impl Into<String>,
    ) -> Self {
        let mut method = method.into();
        method.truncate(MAX_METHOD_LEN);

        Self {
            path: path.into(),
            method,
            status_code,
            detail: detail.into(),
            occurred_at: Utc::now(),
        }
    }
}

impl From<AuditEvent> for NewErrorLog {
    fn from(event: AuditEvent) -> Self {
        NewErrorLog {
            path: event.path,
            method: event.method,
            status_code: i32::from(event.status_code),
            detail: event.detail,
            created_at: event.occurred_at,
        }
    }
}
