//! Repository for the `translation_votes` table and the denormalized
//! vote total on `translations`.

use sqlx::PgPool;
use translab_core::types::DbId;

use crate::models::translation::Translation;
use crate::models::vote::TranslationVote;

/// Column list for `translation_votes` queries.
const VOTE_COLUMNS: &str = "id, translation_id, voter_id, value, created_at, updated_at";

/// Column list for the `translations` row returned after a recompute.
const TRANSLATION_COLUMNS: &str = "id, session_id, source_text, translated_text, author_id, \
                                   status, vote_total, created_at, updated_at";

/// Provides the vote ledger: one live vote per (translation, voter),
/// with the translation's total kept consistent on every write.
pub struct VoteRepo;

impl VoteRepo {
    /// Cast or replace a voter's vote and recompute the stored total,
    /// in one transaction.
    ///
    /// The translation row is locked with `SELECT ... FOR UPDATE` before
    /// the vote upsert, so concurrent voters on the same translation
    /// serialize on that row and each recompute sees every committed
    /// vote. Voters on different translations do not contend.
    ///
    /// Returns the updated translation, or `None` if it does not exist
    /// (the transaction is rolled back).
    pub async fn cast(
        pool: &PgPool,
        translation_id: DbId,
        voter_id: DbId,
        value: i32,
    ) -> Result<Option<Translation>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM translations WHERE id = $1 FOR UPDATE")
                .bind(translation_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            // Dropping the transaction rolls it back.
            return Ok(None);
        }

        // Re-votes replace the previous value rather than accumulating.
        sqlx::query(
            "INSERT INTO translation_votes (translation_id, voter_id, value) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (translation_id, voter_id) \
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(translation_id)
        .bind(voter_id)
        .bind(value)
        .execute(&mut *tx)
        .await?;

        // Recompute from the authoritative vote set rather than applying
        // a delta, so the stored total can never drift.
        let query = format!(
            "UPDATE translations \
             SET vote_total = (SELECT COALESCE(SUM(value), 0) \
                               FROM translation_votes WHERE translation_id = $1), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {TRANSLATION_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Translation>(&query)
            .bind(translation_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Find a voter's live vote on a translation, if any.
    pub async fn find_by_translation_and_voter(
        pool: &PgPool,
        translation_id: DbId,
        voter_id: DbId,
    ) -> Result<Option<TranslationVote>, sqlx::Error> {
        let query = format!(
            "SELECT {VOTE_COLUMNS} FROM translation_votes \
             WHERE translation_id = $1 AND voter_id = $2"
        );
        sqlx::query_as::<_, TranslationVote>(&query)
            .bind(translation_id)
            .bind(voter_id)
            .fetch_optional(pool)
            .await
    }

    /// List all live votes on a translation, oldest first.
    pub async fn list_by_translation(
        pool: &PgPool,
        translation_id: DbId,
    ) -> Result<Vec<TranslationVote>, sqlx::Error> {
        let query = format!(
            "SELECT {VOTE_COLUMNS} FROM translation_votes \
             WHERE translation_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TranslationVote>(&query)
            .bind(translation_id)
            .fetch_all(pool)
            .await
    }
}
