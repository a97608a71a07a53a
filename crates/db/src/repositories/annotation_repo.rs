//! Repository for the `translation_annotations` table. Append-only.

use sqlx::PgPool;
use translab_core::types::DbId;

use crate::models::annotation::{CreateAnnotation, TranslationAnnotation};

/// Column list for `translation_annotations` queries.
const COLUMNS: &str = "id, translation_id, author_id, body, position_x, position_y, created_at";

/// Provides append and read operations for positional annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Attach an annotation to a translation at a 2-D position.
    pub async fn create(
        pool: &PgPool,
        translation_id: DbId,
        author_id: DbId,
        input: &CreateAnnotation,
    ) -> Result<TranslationAnnotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO translation_annotations \
                (translation_id, author_id, body, position_x, position_y) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationAnnotation>(&query)
            .bind(translation_id)
            .bind(author_id)
            .bind(&input.body)
            .bind(input.position_x)
            .bind(input.position_y)
            .fetch_one(pool)
            .await
    }

    /// List a translation's annotations in creation order, oldest first.
    /// Note this is the opposite convention from comment threads.
    pub async fn list_by_translation(
        pool: &PgPool,
        translation_id: DbId,
    ) -> Result<Vec<TranslationAnnotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translation_annotations \
             WHERE translation_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TranslationAnnotation>(&query)
            .bind(translation_id)
            .fetch_all(pool)
            .await
    }
}
