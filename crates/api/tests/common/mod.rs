#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use gamehub_catalog::store::{GameStore, MemoryStore, StoreError};
use gamehub_catalog::Catalog;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::types::EntryId;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tower::ServiceExt;

use gamehub_api::auth::session::AuthConfig;
use gamehub_api::config::{ServerConfig, StoreConfig};
use gamehub_api::router::build_app_router;
use gamehub_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const PLAYER_EMAIL: &str = "player@example.com";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            secret: TEST_JWT_SECRET.to_string(),
            audience: None,
        },
        store: StoreConfig::Memory,
        catalog_refresh_secs: 0,
    }
}

/// Build the full application router over `catalog`, without fetching.
pub fn build_app_with_catalog(catalog: Arc<Catalog>) -> Router {
    let config = test_config();
    let state = AppState {
        catalog,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router over an in-memory store seeded with
/// `games`, after the initial fetch.
pub async fn build_test_app(games: Vec<Game>) -> Router {
    let catalog = Arc::new(Catalog::new(Arc::new(MemoryStore::with_games(games))));
    catalog.fetch_all().await.unwrap();
    build_app_with_catalog(catalog)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn draft(title: &str, category: &str) -> GameDraft {
    GameDraft {
        title: title.to_string(),
        description: format!("{title} is a game"),
        image_url: "https://example.com/cover.jpg".to_string(),
        download_url: format!(
            "https://downloads.example.com/{}.zip",
            title.to_lowercase().replace(' ', "-")
        ),
        category: category.to_string(),
        file_size: "2 GB".to_string(),
    }
}

/// `[Alpha Quest/RPG, Beta Rally/Racing]`, Beta Rally being the newer one.
pub fn sample_games() -> Vec<Game> {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    vec![
        Game::from_draft(uuid::Uuid::new_v4(), base, &draft("Alpha Quest", "RPG")),
        Game::from_draft(
            uuid::Uuid::new_v4(),
            base + Duration::hours(1),
            &draft("Beta Rally", "Racing"),
        ),
    ]
}

/// Store whose every operation fails, as if the backend were unreachable.
pub struct OfflineStore;

impl OfflineStore {
    fn offline() -> StoreError {
        StoreError::Unavailable("connection refused".to_string())
    }
}

#[async_trait]
impl GameStore for OfflineStore {
    fn backend_name(&self) -> &'static str {
        "offline"
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        Err(Self::offline())
    }

    async fn insert_game(&self, _draft: &GameDraft) -> Result<(), StoreError> {
        Err(Self::offline())
    }

    async fn update_game(&self, _id: EntryId, _patch: &GameUpdate) -> Result<(), StoreError> {
        Err(Self::offline())
    }

    async fn delete_game(&self, _id: EntryId) -> Result<(), StoreError> {
        Err(Self::offline())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(Self::offline())
    }
}

// ---------------------------------------------------------------------------
// Session tokens
// ---------------------------------------------------------------------------

/// Sign a session token the way the identity provider would.
pub fn session_token(email: &str, role: Option<&str>) -> String {
    let mut claims = json!({
        "sub": uuid::Uuid::new_v4(),
        "email": email,
        "aud": "authenticated",
        "exp": Utc::now().timestamp() + 3600,
    });
    if let Some(role) = role {
        claims["app_metadata"] = json!({ "role": role });
    }
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn admin_token() -> String {
    session_token(ADMIN_EMAIL, Some("admin"))
}

pub fn player_token() -> String {
    session_token(PLAYER_EMAIL, None)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
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

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
