//! Session and participant models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use translab_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A row from the `sessions` table.
///
/// Name, owner, and language pair are immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub name: String,
    pub owner_id: DbId,
    pub source_language: String,
    pub target_language: String,
    pub created_at: Timestamp,
}

/// DTO for creating a session. The owner id comes from the authenticated
/// caller, not the request body.
#[derive(Debug, Deserialize)]
pub struct CreateSession {
    pub name: String,
    pub source_language: String,
    pub target_language: String,
}

// ---------------------------------------------------------------------------
// SessionParticipant
// ---------------------------------------------------------------------------

/// A row from the `session_participants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SessionParticipant {
    pub id: DbId,
    pub session_id: DbId,
    pub user_id: DbId,
    pub joined_at: Timestamp,
}

/// DTO for enrolling a participant.
#[derive(Debug, Deserialize)]
pub struct AddParticipant {
    pub user_id: DbId,
}

// ---------------------------------------------------------------------------
// Read projections
// ---------------------------------------------------------------------------

/// A session together with its current participant roster.
#[derive(Debug, Serialize)]
pub struct SessionWithParticipants {
    #[serde(flatten)]
    pub session: Session,
    pub participants: Vec<SessionParticipant>,
}
