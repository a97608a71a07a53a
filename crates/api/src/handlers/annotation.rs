//! Handlers for positional annotations on a translation's rendered
//! surface. Append-only, like comments, but listed oldest first.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use translab_core::annotation::{validate_annotation_body, validate_position};
use translab_core::types::DbId;
use translab_db::models::annotation::CreateAnnotation;
use translab_db::repositories::AnnotationRepo;
use translab_events::CollabEvent;

use crate::error::{AppError, AppResult};
use crate::handlers::translation::ensure_translation_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /translations/{id}/annotations
///
/// Attach a positioned note to a translation.
pub async fn create_annotation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
    Json(input): Json<CreateAnnotation>,
) -> AppResult<impl IntoResponse> {
    let translation = ensure_translation_exists(&state.pool, translation_id).await?;
    validate_annotation_body(&input.body).map_err(AppError::Core)?;
    validate_position(input.position_x, input.position_y).map_err(AppError::Core)?;

    let annotation =
        AnnotationRepo::create(&state.pool, translation_id, auth.user_id, &input).await?;

    let event = CollabEvent::new("translation.annotated", translation.session_id)
        .with_entity("annotation", annotation.id)
        .with_actor(auth.user_id)
        .with_payload(serde_json::json!({ "translation_id": translation_id }));
    state.event_bus.publish(event);

    tracing::info!(
        user_id = auth.user_id,
        translation_id = translation_id,
        annotation_id = annotation.id,
        "Annotation added"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: annotation }),
    ))
}

/// GET /translations/{id}/annotations
///
/// List a translation's annotations in creation order, oldest first.
pub async fn list_annotations(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_translation_exists(&state.pool, translation_id).await?;
    let annotations = AnnotationRepo::list_by_translation(&state.pool, translation_id).await?;
    Ok(Json(DataResponse { data: annotations }))
}
