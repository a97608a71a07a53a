pub mod health;
pub mod session;
pub mod translation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                                  create, list (caller's sessions)
/// /sessions/{id}                             get with roster
/// /sessions/{id}/export                      point-in-time snapshot
/// /sessions/{id}/participants                idempotent enroll
/// /sessions/{id}/participants/{user_id}      idempotent remove
/// /sessions/{id}/translations                list with threads, submit
///
/// /translations/{id}                         get with thread
/// /translations/{id}/status                  set lifecycle status
/// /translations/{id}/votes                   list, cast/replace
/// /translations/{id}/comments                list, append
/// /translations/{id}/annotations             list, append
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", session::router())
        .nest("/translations", translation::router())
}
