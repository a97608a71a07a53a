//! Handlers for translation records and their lifecycle status.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use translab_core::error::CoreError;
use translab_core::translation::{validate_translation_status, validate_translation_text};
use translab_core::types::DbId;
use translab_db::models::translation::{
    CreateTranslation, Translation, UpdateTranslationStatus,
};
use translab_db::repositories::TranslationRepo;
use translab_events::CollabEvent;

use crate::error::{AppError, AppResult};
use crate::handlers::session::ensure_session_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a translation or fail with `NotFound`. Returns the row so
/// callers can reach its `session_id` for event scoping.
pub(crate) async fn ensure_translation_exists(
    pool: &PgPool,
    id: DbId,
) -> Result<Translation, AppError> {
    TranslationRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Translation",
            id,
        }))
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// POST /sessions/{id}/translations
///
/// Submit a translation record into a session. Starts in `draft` with a
/// zero vote total.
pub async fn create_translation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Json(input): Json<CreateTranslation>,
) -> AppResult<impl IntoResponse> {
    ensure_session_exists(&state.pool, session_id).await?;
    validate_translation_text("source_text", &input.source_text).map_err(AppError::Core)?;
    validate_translation_text("translated_text", &input.translated_text)
        .map_err(AppError::Core)?;

    let translation =
        TranslationRepo::create(&state.pool, session_id, auth.user_id, &input).await?;

    let event = CollabEvent::new("translation.created", session_id)
        .with_entity("translation", translation.id)
        .with_actor(auth.user_id);
    state.event_bus.publish(event);

    tracing::info!(
        user_id = auth.user_id,
        session_id = session_id,
        translation_id = translation.id,
        "Translation submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: translation }),
    ))
}

/// GET /sessions/{id}/translations
///
/// List a session's translation records newest first, each carrying its
/// comment thread.
pub async fn list_session_translations(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_session_exists(&state.pool, session_id).await?;
    let translations =
        TranslationRepo::list_by_session_with_comments(&state.pool, session_id).await?;
    Ok(Json(DataResponse { data: translations }))
}

/// GET /translations/{id}
///
/// Get a single translation record with its comment thread.
pub async fn get_translation(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let translation = TranslationRepo::find_with_comments(&state.pool, translation_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Translation",
            id: translation_id,
        }))?;
    Ok(Json(DataResponse { data: translation }))
}

/// PUT /translations/{id}/status
///
/// Set a translation's lifecycle status. Any recognized status may be
/// set from any other; there is no enforced transition graph.
pub async fn update_translation_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(translation_id): Path<DbId>,
    Json(input): Json<UpdateTranslationStatus>,
) -> AppResult<impl IntoResponse> {
    validate_translation_status(&input.status).map_err(AppError::Core)?;

    let translation = TranslationRepo::set_status(&state.pool, translation_id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Translation",
            id: translation_id,
        }))?;

    let event = CollabEvent::new("translation.status_changed", translation.session_id)
        .with_entity("translation", translation.id)
        .with_actor(auth.user_id)
        .with_payload(serde_json::json!({ "status": translation.status }));
    state.event_bus.publish(event);

    tracing::info!(
        user_id = auth.user_id,
        translation_id = translation.id,
        status = %translation.status,
        "Translation status changed"
    );

    Ok(Json(DataResponse { data: translation }))
}
