//! Utility functions for code generation, QR rendering and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`qr`] - QR code rendering to PNG
//! - [`base_url`] - Base URL resolution from HTTP headers
//! - [`db_error`] - Database error classification

pub mod base_url;
pub mod code_generator;
pub mod db_error;
pub mod qr;
