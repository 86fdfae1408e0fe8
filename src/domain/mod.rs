//! Domain layer containing business entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`audit_event`] - Error audit event model
//! - [`audit_worker`] - Asynchronous audit persistence worker
//!
//! # Audit Flow
//!
//! 1. A handler (or the framework) produces an error response
//! 2. The error-audit middleware logs it and queues an [`audit_event::AuditEvent`]
//! 3. [`audit_worker::run_audit_worker`] persists it via [`repositories::ErrorLogRepository`]

pub mod audit_event;
pub mod audit_worker;
pub mod entities;
pub mod repositories;
