//! Repository for the `translation_comments` table. Append-only.

use sqlx::PgPool;
use translab_core::types::DbId;

use crate::models::comment::{CreateComment, TranslationComment};

/// Column list for `translation_comments` queries.
const COLUMNS: &str = "id, translation_id, author_id, body, created_at";

/// Provides append and read operations for comment threads. There are
/// no update or delete queries here on purpose.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment to a translation's thread.
    pub async fn create(
        pool: &PgPool,
        translation_id: DbId,
        author_id: DbId,
        input: &CreateComment,
    ) -> Result<TranslationComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO translation_comments (translation_id, author_id, body) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationComment>(&query)
            .bind(translation_id)
            .bind(author_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// List a translation's comments, newest first.
    pub async fn list_by_translation(
        pool: &PgPool,
        translation_id: DbId,
    ) -> Result<Vec<TranslationComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translation_comments \
             WHERE translation_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TranslationComment>(&query)
            .bind(translation_id)
            .fetch_all(pool)
            .await
    }

    /// Batch-fetch comments for a set of translations, newest first.
    /// Used to attach threads when listing a whole session.
    pub async fn list_by_translations(
        pool: &PgPool,
        translation_ids: &[DbId],
    ) -> Result<Vec<TranslationComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translation_comments \
             WHERE translation_id = ANY($1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TranslationComment>(&query)
            .bind(translation_ids)
            .fetch_all(pool)
            .await
    }
}
