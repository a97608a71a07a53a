//! Translation record models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use translab_core::types::{DbId, Timestamp};

use crate::models::comment::TranslationComment;

/// A row from the `translations` table.
///
/// `vote_total` is denormalized: it always equals the signed sum of the
/// live rows in `translation_votes` for this record. The vote repository
/// is the only writer of that column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Translation {
    pub id: DbId,
    pub session_id: DbId,
    pub source_text: String,
    pub translated_text: String,
    pub author_id: DbId,
    pub status: String,
    pub vote_total: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a translation record.
#[derive(Debug, Deserialize)]
pub struct CreateTranslation {
    pub source_text: String,
    pub translated_text: String,
}

/// DTO for setting a translation's lifecycle status.
#[derive(Debug, Deserialize)]
pub struct UpdateTranslationStatus {
    pub status: String,
}

/// A translation record carrying its comment thread.
#[derive(Debug, Serialize)]
pub struct TranslationWithComments {
    #[serde(flatten)]
    pub translation: Translation,
    pub comments: Vec<TranslationComment>,
}
