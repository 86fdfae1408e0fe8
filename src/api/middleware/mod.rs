//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Request spans and latency logging
//! - [`error_audit`] - Error logging and audit queueing
//! - [`panic`] - Panic to 500 conversion

pub mod error_audit;
pub mod panic;
pub mod tracing;
