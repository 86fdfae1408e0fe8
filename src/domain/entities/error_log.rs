//! Error-log entity: the append-only audit trail of error responses.

use chrono::{DateTime, Utc};

/// A persisted record of one error response.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    pub id: i64,
    pub path: String,
    pub method: String,
    pub status_code: i32,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for appending an error-log record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewErrorLog {
    pub path: String,
    pub method: String,
    pub status_code: i32,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}
