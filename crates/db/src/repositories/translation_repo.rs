//! Repository for the `translations` table.

use std::collections::HashMap;

use sqlx::PgPool;
use translab_core::types::DbId;

use crate::models::comment::TranslationComment;
use crate::models::translation::{CreateTranslation, Translation, TranslationWithComments};
use crate::repositories::comment_repo::CommentRepo;

/// Column list for `translations` queries.
const COLUMNS: &str = "id, session_id, source_text, translated_text, author_id, \
                       status, vote_total, created_at, updated_at";

/// Provides queries for translation records and their lifecycle status.
pub struct TranslationRepo;

impl TranslationRepo {
    /// Submit a new translation record. Status starts at `draft` and the
    /// vote total at zero (schema defaults).
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        author_id: DbId,
        input: &CreateTranslation,
    ) -> Result<Translation, sqlx::Error> {
        let query = format!(
            "INSERT INTO translations (session_id, source_text, translated_text, author_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(session_id)
            .bind(&input.source_text)
            .bind(&input.translated_text)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a translation by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Translation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM translations WHERE id = $1");
        sqlx::query_as::<_, Translation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set a translation's lifecycle status. The caller validates the
    /// value against the recognized set first.
    ///
    /// Returns the updated row, or `None` if the translation does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Translation>, sqlx::Error> {
        let query = format!(
            "UPDATE translations SET status = $1, updated_at = NOW() \
             WHERE id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a session's translations, newest first.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<Translation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translations \
             WHERE session_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// List a session's translations newest first, each carrying its
    /// comment thread. Comments are fetched in one batch query and
    /// grouped in memory; records without comments get an empty list.
    pub async fn list_by_session_with_comments(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<TranslationWithComments>, sqlx::Error> {
        let translations = Self::list_by_session(pool, session_id).await?;
        if translations.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = translations.iter().map(|t| t.id).collect();
        let comments = CommentRepo::list_by_translations(pool, &ids).await?;

        let mut grouped: HashMap<DbId, Vec<TranslationComment>> = HashMap::new();
        for comment in comments {
            grouped.entry(comment.translation_id).or_default().push(comment);
        }

        Ok(translations
            .into_iter()
            .map(|translation| {
                let comments = grouped.remove(&translation.id).unwrap_or_default();
                TranslationWithComments {
                    translation,
                    comments,
                }
            })
            .collect())
    }

    /// Find a translation with its comment thread attached.
    pub async fn find_with_comments(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TranslationWithComments>, sqlx::Error> {
        let Some(translation) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let comments = CommentRepo::list_by_translation(pool, id).await?;
        Ok(Some(TranslationWithComments {
            translation,
            comments,
        }))
    }
}
