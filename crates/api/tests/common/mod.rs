#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use supportdesk_api::auth::jwt::{generate_access_token, JwtConfig};
use supportdesk_api::config::{ServerConfig, StorageBackend};
use supportdesk_api::router::build_app_router;
use supportdesk_api::service::notes::NotesService;
use supportdesk_api::state::AppState;
use supportdesk_core::roles::{ROLE_ADMINISTRATOR, ROLE_SUPPORT};
use supportdesk_core::security_token::SECURITY_TOKEN_HEADER;
use supportdesk_db::store::{MemoryNoteStore, NoteStore};

pub const ADMIN_ID: i64 = 1;
pub const SUPPORT_ID: i64 = 2;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-jwt-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
        },
        security_token_secret: "test-security-token-secret".to_string(),
        storage: StorageBackend::Memory,
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with_store(Arc::new(MemoryNoteStore::new()))
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_store(store: Arc<dyn NoteStore>) -> Router {
    let config = test_config();
    let state = AppState {
        notes: NotesService::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint an access token for a user signed with the test secret.
pub fn bearer_for(user_id: i64, name: &str, role: &str) -> String {
    generate_access_token(user_id, name, role, &test_config().jwt)
        .expect("token generation should succeed")
}

pub fn admin_bearer() -> String {
    bearer_for(ADMIN_ID, "Avery Admin", ROLE_ADMINISTRATOR)
}

pub fn support_bearer() -> String {
    bearer_for(SUPPORT_ID, "Sam Support", ROLE_SUPPORT)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    security_token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header("authorization", format!("Bearer {bearer}"));
    }
    if let Some(token) = security_token {
        builder = builder.header(SECURITY_TOKEN_HEADER, token);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, bearer: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(bearer), None, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Fetch a security token for `action` through the API.
pub async fn fetch_security_token(app: &Router, bearer: &str, action: &str) -> String {
    let response = get(app, &format!("/api/v1/security-tokens/{action}"), bearer).await;
    assert_eq!(response.status(), 200, "token issuance should succeed");
    let json = body_json(response).await;
    json["data"]["token"].as_str().unwrap().to_string()
}

/// Save a note through the API, fetching a fresh `notes` token first.
pub async fn save_note(
    app: &Router,
    bearer: &str,
    note_id: i64,
    content: &str,
) -> Response<Body> {
    let token = fetch_security_token(app, bearer, "notes").await;
    send(
        app,
        Method::POST,
        "/api/v1/notes",
        Some(bearer),
        Some(&token),
        Some(serde_json::json!({ "note_id": note_id, "content": content })),
    )
    .await
}

/// Save a note and return its id.
pub async fn create_note(app: &Router, bearer: &str, content: &str) -> i64 {
    let response = save_note(app, bearer, 0, content).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
