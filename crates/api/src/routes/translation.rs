//! Route definitions for the `/translations` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{annotation, comment, translation, vote};
use crate::state::AppState;

/// Routes mounted at `/translations`.
///
/// ```text
/// GET    /{id}                -> get_translation
/// PUT    /{id}/status         -> update_translation_status
/// GET    /{id}/votes          -> list_votes
/// POST   /{id}/votes          -> cast_vote
/// GET    /{id}/comments       -> list_comments
/// POST   /{id}/comments       -> create_comment
/// GET    /{id}/annotations    -> list_annotations
/// POST   /{id}/annotations    -> create_annotation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(translation::get_translation))
        .route("/{id}/status", put(translation::update_translation_status))
        .route("/{id}/votes", get(vote::list_votes).post(vote::cast_vote))
        .route(
            "/{id}/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/{id}/annotations",
            get(annotation::list_annotations).post(annotation::create_annotation),
        )
}
