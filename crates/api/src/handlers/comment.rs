//! Handlers for comment threads. Append-only: no edit or delete routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use translab_core::comment::validate_comment_body;
use translab_core::types::DbId;
use translab_db::models::comment::CreateComment;
use translab_db::repositories::CommentRepo;
use translab_events::CollabEvent;

use crate::error::{AppError, AppResult};
use crate::handlers::translation::ensure_translation_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /translations/{id}/comments
///
/// Append a remark to a translation's comment thread.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let translation = ensure_translation_exists(&state.pool, translation_id).await?;
    validate_comment_body(&input.body).map_err(AppError::Core)?;

    let comment = CommentRepo::create(&state.pool, translation_id, auth.user_id, &input).await?;

    let event = CollabEvent::new("translation.commented", translation.session_id)
        .with_entity("comment", comment.id)
        .with_actor(auth.user_id)
        .with_payload(serde_json::json!({ "translation_id": translation_id }));
    state.event_bus.publish(event);

    tracing::info!(
        user_id = auth.user_id,
        translation_id = translation_id,
        comment_id = comment.id,
        "Comment added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /translations/{id}/comments
///
/// List a translation's comment thread, newest first.
pub async fn list_comments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_translation_exists(&state.pool, translation_id).await?;
    let comments = CommentRepo::list_by_translation(&state.pool, translation_id).await?;
    Ok(Json(DataResponse { data: comments }))
}
