//! Integration tests for session creation and membership endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete_as, get_as, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Create a session as `owner` and return its id.
async fn create_session(app: &Router, owner: i64, name: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/sessions",
        owner,
        json!({
            "name": name,
            "source_language": "en",
            "target_language": "hi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: session creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_session_returns_created_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sessions",
        1,
        json!({
            "name": "Demo",
            "source_language": "en",
            "target_language": "hi",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Demo");
    assert_eq!(json["data"]["owner_id"], 1);
    assert_eq!(json["data"]["source_language"], "en");
    assert_eq!(json["data"]["target_language"], "hi");
    assert!(json["data"]["created_at"].is_string());
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_session_rejects_blank_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sessions",
        1,
        json!({
            "name": "   ",
            "source_language": "en",
            "target_language": "hi",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_session_rejects_malformed_language_tag(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sessions",
        1,
        json!({
            "name": "Demo",
            "source_language": "en US",
            "target_language": "hi",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: session lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_session_includes_roster(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session_id = create_session(&app, 1, "Roster").await;

    post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/participants"),
        1,
        json!({ "user_id": 1 }),
    )
    .await;
    post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/participants"),
        1,
        json!({ "user_id": 2 }),
    )
    .await;

    let response = get_as(app, &format!("/api/v1/sessions/{session_id}"), 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], session_id);
    let roster = json["data"]["participants"].as_array().unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0]["user_id"], 1);
    assert_eq!(roster[1]["user_id"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_unknown_session_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_as(app, "/api/v1/sessions/999999", 1).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: idempotent membership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn add_participant_twice_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session_id = create_session(&app, 1, "Membership").await;
    let uri = format!("/api/v1/sessions/{session_id}/participants");

    let first = post_json(app.clone(), &uri, 1, json!({ "user_id": 2 })).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // The repeat is a no-op that surfaces the existing row.
    let second = post_json(app.clone(), &uri, 1, json!({ "user_id": 2 })).await;
    assert_eq!(second.status(), StatusCode::OK);
    let json = body_json(second).await;
    assert_eq!(json["data"]["user_id"], 2);

    let session = get_as(app, &format!("/api/v1/sessions/{session_id}"), 1).await;
    let roster = body_json(session).await["data"]["participants"]
        .as_array()
        .unwrap()
        .len();
    assert_eq!(roster, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn add_participant_rejects_non_positive_user_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session_id = create_session(&app, 1, "Membership").await;

    let response = post_json(
        app,
        &format!("/api/v1/sessions/{session_id}/participants"),
        1,
        json!({ "user_id": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn add_participant_to_unknown_session_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/sessions/999999/participants",
        1,
        json!({ "user_id": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn remove_participant_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);
    let session_id = create_session(&app, 1, "Membership").await;
    post_json(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/participants"),
        1,
        json!({ "user_id": 2 }),
    )
    .await;

    let uri = format!("/api/v1/sessions/{session_id}/participants/2");
    let first = delete_as(app.clone(), &uri, 1).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = delete_as(app, &uri, 1).await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Test: caller's session listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_sessions_covers_owned_and_joined_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    let owned = create_session(&app, 1, "Owned").await;
    let joined = create_session(&app, 2, "Joined").await;
    create_session(&app, 3, "Unrelated").await;

    post_json(
        app.clone(),
        &format!("/api/v1/sessions/{joined}/participants"),
        2,
        json!({ "user_id": 1 }),
    )
    .await;

    let response = get_as(app, "/api/v1/sessions", 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![joined, owned]);
}
