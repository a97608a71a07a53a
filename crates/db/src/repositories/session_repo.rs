//! Repository for the `sessions` and `session_participants` tables.

use sqlx::PgPool;
use translab_core::types::DbId;

use crate::models::session::{CreateSession, Session, SessionParticipant};

/// Column list for `sessions` queries.
const COLUMNS: &str = "id, name, owner_id, source_language, target_language, created_at";

/// Column list for `session_participants` queries.
const PARTICIPANT_COLUMNS: &str = "id, session_id, user_id, joined_at";

/// Provides queries for collaboration sessions and their rosters.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a new session owned by `owner_id`, returning the created row.
    ///
    /// The owner is not enrolled as a participant here; callers follow up
    /// with [`SessionRepo::add_participant`].
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateSession,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (name, owner_id, source_language, target_language) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.name)
            .bind(owner_id)
            .bind(&input.source_language)
            .bind(&input.target_language)
            .fetch_one(pool)
            .await
    }

    /// Find a session by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sessions where the user is owner or participant,
    /// de-duplicated, most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions s \
             WHERE s.owner_id = $1 \
                OR EXISTS (SELECT 1 FROM session_participants p \
                           WHERE p.session_id = s.id AND p.user_id = $1) \
             ORDER BY s.created_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Enroll a user in a session.
    ///
    /// Uses `INSERT ... ON CONFLICT DO NOTHING` against the unique
    /// (session, user) constraint so the operation is idempotent under
    /// at-least-once delivery. Returns the new row, or `None` if the user
    /// was already enrolled.
    pub async fn add_participant(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<Option<SessionParticipant>, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_participants (session_id, user_id) \
             VALUES ($1, $2) \
             ON CONFLICT (session_id, user_id) DO NOTHING \
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        sqlx::query_as::<_, SessionParticipant>(&query)
            .bind(session_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user's enrollment row in a session, if any.
    pub async fn find_participant(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<Option<SessionParticipant>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM session_participants \
             WHERE session_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, SessionParticipant>(&query)
            .bind(session_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a user from a session. Idempotent: returns `true` if a row
    /// was deleted, `false` if the user was not enrolled.
    pub async fn remove_participant(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM session_participants WHERE session_id = $1 AND user_id = $2",
        )
        .bind(session_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a session's participants in enrollment order.
    pub async fn list_participants(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<SessionParticipant>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM session_participants \
             WHERE session_id = $1 \
             ORDER BY joined_at ASC, id ASC"
        );
        sqlx::query_as::<_, SessionParticipant>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }
}
