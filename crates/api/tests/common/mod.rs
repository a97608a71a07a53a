//! Shared helpers for API integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) and provides small request/response helpers around
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use translab_api::config::ServerConfig;
use translab_api::router::{build_app_router, USER_ID_HEADER};
use translab_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(translab_events::EventBus::default()),
    };
    build_app_router(state, &config)
}

/// Issue a request with optional identity and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<i64>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET without an identity header.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// GET carrying the `x-user-id` identity header.
pub async fn get_as(app: Router, uri: &str, user_id: i64) -> Response {
    send(app, Method::GET, uri, Some(user_id), None).await
}

/// POST a JSON body as a user.
pub async fn post_json(
    app: Router,
    uri: &str,
    user_id: i64,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(user_id), Some(body)).await
}

/// PUT a JSON body as a user.
pub async fn put_json(app: Router, uri: &str, user_id: i64, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(user_id), Some(body)).await
}

/// DELETE as a user.
pub async fn delete_as(app: Router, uri: &str, user_id: i64) -> Response {
    send(app, Method::DELETE, uri, Some(user_id), None).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
