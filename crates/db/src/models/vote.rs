//! Vote models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use translab_core::types::{DbId, Timestamp};

/// A row from the `translation_votes` table.
///
/// At most one row exists per (translation, voter); re-votes overwrite
/// `value` in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TranslationVote {
    pub id: DbId,
    pub translation_id: DbId,
    pub voter_id: DbId,
    pub value: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for casting a vote.
#[derive(Debug, Deserialize)]
pub struct CastVote {
    pub value: i32,
}

/// The outcome of a vote: the recomputed running total.
#[derive(Debug, Serialize)]
pub struct VoteOutcome {
    pub translation_id: DbId,
    pub vote_total: i64,
}
