//! Comment model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use translab_core::types::{DbId, Timestamp};

/// A row from the `translation_comments` table. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TranslationComment {
    pub id: DbId,
    pub translation_id: DbId,
    pub author_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for adding a comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub body: String,
}
