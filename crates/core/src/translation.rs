//! Translation record constants and validation functions.
//!
//! Defines the lifecycle status values and text rules used by the DB and
//! API layers. Status transitions are deliberately unconstrained: any
//! recognized status may be set from any other.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length for source or translated text.
pub const MAX_TRANSLATION_TEXT_LENGTH: usize = 50_000;

/// Freshly submitted, not yet under review.
pub const STATUS_DRAFT: &str = "draft";

/// Under active review by participants.
pub const STATUS_REVIEW: &str = "review";

/// Accepted as the final translation.
pub const STATUS_APPROVED: &str = "approved";

/// All valid translation status values.
pub const VALID_TRANSLATION_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_REVIEW, STATUS_APPROVED];

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that a status string is one of the accepted values.
pub fn validate_translation_status(status: &str) -> Result<(), CoreError> {
    if VALID_TRANSLATION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid translation status '{status}'. Must be one of: {}",
            VALID_TRANSLATION_STATUSES.join(", ")
        )))
    }
}

/// Validate one of the two text fields of a translation record.
///
/// `field` names the input in the error message (`source_text` or
/// `translated_text`).
pub fn validate_translation_text(field: &'static str, text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if text.len() > MAX_TRANSLATION_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_TRANSLATION_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
