//! Annotation validation: positioned notes on a rendered translation.
//!
//! Positions are 2-D floating-point coordinates in an application-defined
//! space (typically pixel offsets on the rendered surface). The backend
//! does not interpret them beyond requiring finite numbers.

use crate::error::CoreError;

/// Maximum length for an annotation body.
pub const MAX_ANNOTATION_LENGTH: usize = 2_000;

/// Validate an annotation body: non-blank and within the length cap.
pub fn validate_annotation_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Annotation body must not be empty".to_string(),
        ));
    }
    if body.len() > MAX_ANNOTATION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Annotation body exceeds maximum length of {MAX_ANNOTATION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an annotation position. Both coordinates must be finite.
pub fn validate_position(x: f64, y: f64) -> Result<(), CoreError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(CoreError::Validation(format!(
            "Annotation position ({x}, {y}) must use finite coordinates"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_body_accepted() {
        assert!(validate_annotation_body("Check this word choice").is_ok());
    }

    #[test]
    fn test_blank_annotation_rejected() {
        assert!(validate_annotation_body("").is_err());
        assert!(validate_annotation_body(" \t ").is_err());
    }

    #[test]
    fn test_oversized_annotation_rejected() {
        let body = "x".repeat(MAX_ANNOTATION_LENGTH + 1);
        assert!(validate_annotation_body(&body).is_err());
    }

    #[test]
    fn test_finite_positions_accepted() {
        assert!(validate_position(0.0, 0.0).is_ok());
        assert!(validate_position(-12.5, 340.25).is_ok());
    }

    #[test]
    fn test_non_finite_positions_rejected() {
        assert!(validate_position(f64::NAN, 0.0).is_err());
        assert!(validate_position(0.0, f64::INFINITY).is_err());
        assert!(validate_position(f64::NEG_INFINITY, f64::NAN).is_err());
    }
}
