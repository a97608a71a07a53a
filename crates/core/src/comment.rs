//! Comment thread validation.
//!
//! Comments are append-only remarks on a translation record; there is no
//! edit or delete operation anywhere in the system.

use crate::error::CoreError;

/// Maximum length for a comment body.
pub const MAX_COMMENT_LENGTH: usize = 10_000;

/// Validate a comment body: non-blank and within the length cap.
pub fn validate_comment_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Comment body must not be empty".to_string(),
        ));
    }
    if body.len() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment body exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}
