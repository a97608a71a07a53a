//! Handler for session export snapshots.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use translab_core::error::CoreError;
use translab_core::types::DbId;
use translab_db::models::export::SessionExport;
use translab_db::repositories::{SessionRepo, TranslationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /sessions/{id}/export
///
/// Materialize a read-only snapshot of a session: the session row, its
/// roster, and every translation record with its comment thread, stamped
/// at composition time. Nothing is persisted.
pub async fn export_session(
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
    let translations =
        TranslationRepo::list_by_session_with_comments(&state.pool, session_id).await?;

    let export = SessionExport {
        session,
        participants,
        translations,
        exported_at: Utc::now(),
    };

    tracing::info!(
        session_id = session_id,
        translation_count = export.translations.len(),
        "Session exported"
    );

    Ok(Json(DataResponse { data: export }))
}
