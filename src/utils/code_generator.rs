//! Short code generation.
//!
//! Codes are drawn from the 62-character alphanumeric alphabet using the
//! thread-local CSPRNG.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random short code of `length` characters from `[A-Za-z0-9]`.
///
/// # Examples
///
/// ```
/// use snaplink::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
