//! Route definitions for the `/sessions` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{export, session, translation};
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /                                   -> list_my_sessions
/// POST   /                                   -> create_session
/// GET    /{id}                               -> get_session
/// GET    /{id}/export                        -> export_session
/// POST   /{id}/participants                  -> add_participant
/// DELETE /{id}/participants/{user_id}        -> remove_participant
/// GET    /{id}/translations                  -> list_session_translations
/// POST   /{id}/translations                  -> create_translation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(session::list_my_sessions).post(session::create_session),
        )
        .route("/{id}", get(session::get_session))
        .route("/{id}/export", get(export::export_session))
        .route("/{id}/participants", post(session::add_participant))
        .route(
            "/{id}/participants/{user_id}",
            delete(session::remove_participant),
        )
        .route(
            "/{id}/translations",
            get(translation::list_session_translations).post(translation::create_translation),
        )
}
