//! Annotation model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use translab_core::types::{DbId, Timestamp};

/// A row from the `translation_annotations` table.
///
/// The position is a 2-D coordinate in an application-defined space
/// (typically pixel offsets on the rendered translation). Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TranslationAnnotation {
    pub id: DbId,
    pub translation_id: DbId,
    pub author_id: DbId,
    pub body: String,
    pub position_x: f64,
    pub position_y: f64,
    pub created_at: Timestamp,
}

/// DTO for adding an annotation.
#[derive(Debug, Deserialize)]
pub struct CreateAnnotation {
    pub body: String,
    pub position_x: f64,
    pub position_y: f64,
}
