//! Best-effort hand-off of error audit records to the background worker.

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::domain::audit_event::AuditEvent;

/// Queues audit events for [`crate::domain::audit_worker::run_audit_worker`].
///
/// Recording never blocks and never fails: a full or closed queue is logged
/// and the event is dropped.
#[derive(Clone)]
pub struct AuditService {
    sender: mpsc::Sender<AuditEvent>,
}

impl AuditService {
    pub fn new(sender: mpsc::Sender<AuditEvent>) -> Self {
        Self { sender }
    }

    pub fn record(&self, event: AuditEvent) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(
                    path = %event.path,
                    status = event.status_code,
                    "Audit queue is full, dropping error log"
                );
            }
            Err(TrySendError::Closed(event)) => {
                tracing::warn!(
                    path = %event.path,
                    status = event.status_code,
                    "Audit queue is closed, dropping error log"
                );
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Free slots left in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}
