//! Vote value constants and validation.

use crate::error::CoreError;

/// Approve the candidate translation.
pub const VOTE_UP: i32 = 1;

/// Reject the candidate translation.
pub const VOTE_DOWN: i32 = -1;

/// Validate that a vote carries a signed unit value.
pub fn validate_vote_value(value: i32) -> Result<(), CoreError> {
    if value == VOTE_UP || value == VOTE_DOWN {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid vote value {value}. Must be {VOTE_UP} or {VOTE_DOWN}"
        )))
    }
}
