//! Domain error taxonomy shared by all translab crates.

use crate::types::DbId;

/// Domain-level failures surfaced by validation functions and handlers.
///
/// Database failures are not represented here; the API layer wraps
/// `sqlx::Error` separately so persistence problems are never conflated
/// with caller-fixable input problems.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller-supplied input violated a domain rule. Caller-fixable,
    /// never retried automatically.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with current persisted state.
    #[error("{0}")]
    Conflict(String),

    /// The caller presented no usable identity.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller's identity is known but lacks permission.
    #[error("{0}")]
    Forbidden(String),

    /// An internal invariant was broken.
    #[error("{0}")]
    Internal(String),
}
