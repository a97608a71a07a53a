//! Handlers for the vote ledger.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use translab_core::error::CoreError;
use translab_core::types::DbId;
use translab_core::vote::validate_vote_value;
use translab_db::models::vote::{CastVote, VoteOutcome};
use translab_db::repositories::VoteRepo;
use translab_events::CollabEvent;

use crate::error::{AppError, AppResult};
use crate::handlers::translation::ensure_translation_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /translations/{id}/votes
///
/// Cast or replace the caller's vote on a translation. The response
/// carries the recomputed total, which is transactionally consistent
/// with the upserted vote.
pub async fn cast_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
    Json(input): Json<CastVote>,
) -> AppResult<impl IntoResponse> {
    validate_vote_value(input.value).map_err(AppError::Core)?;

    let translation = VoteRepo::cast(&state.pool, translation_id, auth.user_id, input.value)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Translation",
            id: translation_id,
        }))?;

    let event = CollabEvent::new("translation.voted", translation.session_id)
        .with_entity("translation", translation.id)
        .with_actor(auth.user_id)
        .with_payload(serde_json::json!({
            "value": input.value,
            "vote_total": translation.vote_total,
        }));
    state.event_bus.publish(event);

    tracing::info!(
        user_id = auth.user_id,
        translation_id = translation.id,
        value = input.value,
        vote_total = translation.vote_total,
        "Vote cast"
    );

    Ok(Json(DataResponse {
        data: VoteOutcome {
            translation_id: translation.id,
            vote_total: translation.vote_total,
        },
    }))
}

/// GET /translations/{id}/votes
///
/// List the live votes on a translation, oldest first.
pub async fn list_votes(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_translation_exists(&state.pool, translation_id).await?;
    let votes = VoteRepo::list_by_translation(&state.pool, translation_id).await?;
    Ok(Json(DataResponse { data: votes }))
}
