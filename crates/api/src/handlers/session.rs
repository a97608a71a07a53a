//! Handlers for collaboration sessions and participant membership.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use translab_core::error::CoreError;
use translab_core::session::{validate_language_tag, validate_session_name, validate_user_id};
use translab_core::types::DbId;
use translab_db::models::session::{AddParticipant, CreateSession, SessionWithParticipants};
use translab_db::repositories::SessionRepo;
use translab_events::CollabEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fail with `NotFound` unless the session exists.
pub(crate) async fn ensure_session_exists(pool: &PgPool, id: DbId) -> Result<(), AppError> {
    SessionRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id,
        }))
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// POST /sessions
///
/// Create a new collaboration session owned by the caller. The owner is
/// not auto-enrolled as a participant; clients follow up with the
/// add-participant call.
pub async fn create_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSession>,
) -> AppResult<impl IntoResponse> {
    validate_session_name(&input.name).map_err(AppError::Core)?;
    validate_language_tag("source_language", &input.source_language).map_err(AppError::Core)?;
    validate_language_tag("target_language", &input.target_language).map_err(AppError::Core)?;

    let session = SessionRepo::create(&state.pool, auth.user_id, &input).await?;

    let event = CollabEvent::new("session.created", session.id)
        .with_entity("session", session.id)
        .with_actor(auth.user_id);
    state.event_bus.publish(event);

    tracing::info!(
        user_id = auth.user_id,
        session_id = session.id,
        source_language = %session.source_language,
        target_language = %session.target_language,
        "Session created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /sessions
///
/// List the sessions where the caller is owner or participant,
/// de-duplicated, most recently created first.
pub async fn list_my_sessions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sessions = SessionRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// GET /sessions/{id}
///
/// Get a session with its current participant roster.
pub async fn get_session(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let session = SessionRepo::find_by_id(&state.pool, session_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Session",
            id: session_id,
        }))?;
    let participants = SessionRepo::list_participants(&state.pool, session_id).await?;

    Ok(Json(DataResponse {
        data: SessionWithParticipants {
            session,
            participants,
        },
    }))
}

/// POST /sessions/{id}/participants
///
/// Enroll a user in a session. Idempotent: enrolling an already-present
/// user returns the existing row instead of an error.
pub async fn add_participant(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Json(input): Json<AddParticipant>,
) -> AppResult<impl IntoResponse> {
    ensure_session_exists(&state.pool, session_id).await?;
    validate_user_id(input.user_id).map_err(AppError::Core)?;

    match SessionRepo::add_participant(&state.pool, session_id, input.user_id).await? {
        Some(participant) => {
            let event = CollabEvent::new("session.participant_added", session_id)
                .with_entity("participant", participant.id)
                .with_actor(auth.user_id)
                .with_payload(serde_json::json!({ "user_id": input.user_id }));
            state.event_bus.publish(event);

            tracing::info!(
                user_id = auth.user_id,
                session_id = session_id,
                participant_user_id = input.user_id,
                "Participant added"
            );

            Ok((
                StatusCode::CREATED,
                Json(DataResponse { data: participant }),
            ))
        }
        // Already enrolled: surface the existing row, not an error.
        None => {
            let existing = SessionRepo::find_participant(&state.pool, session_id, input.user_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(
                        "participant insert conflicted but no row exists".to_string(),
                    )
                })?;
            Ok((StatusCode::OK, Json(DataResponse { data: existing })))
        }
    }
}

/// DELETE /sessions/{id}/participants/{user_id}
///
/// Remove a user from a session. Idempotent: removing an absent user is
/// a no-op, and both paths return 204.
pub async fn remove_participant(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((session_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    ensure_session_exists(&state.pool, session_id).await?;

    let removed = SessionRepo::remove_participant(&state.pool, session_id, user_id).await?;

    if removed {
        let event = CollabEvent::new("session.participant_removed", session_id)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({ "user_id": user_id }));
        state.event_bus.publish(event);

        tracing::info!(
            user_id = auth.user_id,
            session_id = session_id,
            removed_user_id = user_id,
            "Participant removed"
        );
    }

    Ok(StatusCode::NO_CONTENT)
}
