//! REST client for the managed backend's PostgREST-style table API.
//!
//! All requests go to `{base_url}/rest/v1/{table}` and carry the project API
//! key both as `apikey` and as a bearer token. Row filters use the
//! `column=eq.value` syntax.

use std::time::Duration;

use async_trait::async_trait;
use gamehub_core::game::{Game, GameDraft, GameUpdate};
use gamehub_core::types::EntryId;

use super::{GameStore, StoreError};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default collection name.
pub const DEFAULT_TABLE: &str = "games";

/// Connection settings for [`RestStore`].
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Base URL of the backend, e.g. `https://project.example.co`.
    pub base_url: String,
    /// Project API key.
    pub api_key: String,
    /// Collection name (default: `games`).
    pub table: String,
    /// Per-request timeout (default: 10 s).
    pub timeout: Duration,
}

impl RestStoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for one backend table.
pub struct RestStore {
    client: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl RestStore {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: RestStoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a store reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: RestStoreConfig) -> Self {
        let table_url = format!(
            "{}/rest/v1/{}",
            config.base_url.trim_end_matches('/'),
            config.table
        );
        Self {
            client,
            table_url,
            api_key: config.api_key,
        }
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn id_filter(id: EntryId) -> String {
        format!("eq.{id}")
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or turn it into a
    /// [`StoreError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Parse a `return=representation` body and fail if it matched no row.
    async fn expect_affected(response: reqwest::Response, id: EntryId) -> Result<(), StoreError> {
        let affected: Vec<Game> = Self::parse_response(response).await?;
        if affected.is_empty() {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl GameStore for RestStore {
    fn backend_name(&self) -> &'static str {
        "rest"
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn insert_game(&self, draft: &GameDraft) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=minimal")
            .json(&[draft])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn update_game(&self, id: EntryId, patch: &GameUpdate) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::PATCH)
            .query(&[("id", Self::id_filter(id))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        Self::expect_affected(response, id).await
    }

    async fn delete_game(&self, id: EntryId) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::DELETE)
            .query(&[("id", Self::id_filter(id))])
            .header("Prefer", "return=representation")
            .send()
            .await?;
        Self::expect_affected(response, id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_ignores_trailing_slash() {
        let store = RestStore::with_client(
            reqwest::Client::new(),
            RestStoreConfig::new("https://project.example.co/", "key"),
        );
        assert_eq!(store.table_url, "https://project.example.co/rest/v1/games");
    }

    #[test]
    fn custom_table_name() {
        let mut config = RestStoreConfig::new("http://localhost:54321", "key");
        config.table = "catalog_games".to_string();
        let store = RestStore::with_client(reqwest::Client::new(), config);
        assert_eq!(store.table_url, "http://localhost:54321/rest/v1/catalog_games");
    }

    #[test]
    fn id_filter_uses_eq_operator() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            RestStore::id_filter(id),
            "eq.00000000-0000-0000-0000-000000000000"
        );
    }
}
