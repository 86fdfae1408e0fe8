//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A short code mapped to its destination URL
//! - [`ErrorLog`] - An audit record of an error response
//!
//! Creation inputs live in separate structs (`NewShortUrl`, `NewErrorLog`).

pub mod error_log;
pub mod short_url;

pub use error_log::{ErrorLog, NewErrorLog};
pub use short_url::{MAX_SHORT_CODE_LEN, NewShortUrl, ShortUrl, is_reserved_code};
