//! Background worker that persists audit events.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::audit_event::AuditEvent;
use crate::domain::repositories::ErrorLogRepository;

/// Drains the audit queue into the error-log store until every sender is dropped.
///
/// Store failures are logged and swallowed; one failed write never stops the
/// worker or reaches a caller.
pub async fn run_audit_worker(
    mut rx: mpsc::Receiver<AuditEvent>,
    repository: Arc<dyn ErrorLogRepository>,
) {
    tracing::debug!("Audit worker started");

    while let Some(event) = rx.recv().await {
        let path = event.path.clone();
        let status = event.status_code;

        if let Err(e) = repository.insert(event.into()).await {
            tracing::error!(%path, status, error = %e, "Failed to persist error log");
        }
    }

    tracing::info!("Audit worker stopped");
}
