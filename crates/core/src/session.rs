//! Session constants and validation functions.
//!
//! A session is the collaboration container for one language pair. Its
//! name, owner, and language tags are fixed at creation time; only the
//! participant roster changes afterwards.

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length for a session's display name.
pub const MAX_SESSION_NAME_LENGTH: usize = 200;

/// Maximum length for a language tag (e.g. `en`, `pt-BR`).
pub const MAX_LANGUAGE_TAG_LENGTH: usize = 16;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a session display name: non-blank and within the length cap.
pub fn validate_session_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Session name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_SESSION_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Session name exceeds maximum length of {MAX_SESSION_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a language tag.
///
/// Accepts ASCII letters, digits, and hyphens, which covers the usual
/// `en` / `en-US` / `zh-Hant` shapes without pulling in a full BCP 47
/// parser. `field` names the offending input in the error message.
pub fn validate_language_tag(field: &'static str, tag: &str) -> Result<(), CoreError> {
    if tag.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if tag.len() > MAX_LANGUAGE_TAG_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} '{tag}' exceeds maximum length of {MAX_LANGUAGE_TAG_LENGTH} characters"
        )));
    }
    if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CoreError::Validation(format!(
            "{field} '{tag}' must contain only ASCII letters, digits, and hyphens"
        )));
    }
    Ok(())
}

/// Validate a user id supplied by the authentication collaborator.
///
/// Ids are opaque to us but must be positive; zero and negative values
/// only ever show up from misconfigured gateways.
pub fn validate_user_id(user_id: DbId) -> Result<(), CoreError> {
    if user_id <= 0 {
        return Err(CoreError::Validation(format!(
            "Invalid user id {user_id}. User ids must be positive"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
