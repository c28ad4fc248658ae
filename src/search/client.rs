//! HTTP client for the remote search engine

use crate::config::EngineConfig;
use crate::search::error::{SearchError, SearchResult};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// Engine `_search` response envelope
#[derive(Debug, Deserialize)]
pub struct EngineResponse {
    pub hits: EngineHits,
}

#[derive(Debug, Deserialize)]
pub struct EngineHits {
    pub total: EngineTotal,
    pub hits: Vec<EngineHit>,
}

#[derive(Debug, Deserialize)]
pub struct EngineTotal {
    pub value: u64,
}

/// One raw hit; only `_source` is consumed downstream
#[derive(Debug, Deserialize)]
pub struct EngineHit {
    #[serde(rename = "_source", default)]
    pub source: Map<String, Value>,
}

/// Shared handle to the search engine
///
/// Wraps one reqwest `Client`; constructed once at startup and reused
/// for the life of the process. Connection pooling is whatever reqwest
/// provides internally.
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: Client,
    endpoint: String,
    index: String,
    username: String,
    password: String,
    timeout_secs: u64,
}

impl EngineClient {
    /// Build a client from the engine configuration
    pub fn new(config: &EngineConfig) -> SearchResult<Self> {
        Self::from_parts(
            config.endpoint(),
            config.index.clone(),
            config.username.clone(),
            config.password.clone(),
            config.insecure_tls,
            config.timeout_secs,
        )
    }

    /// Build a client from raw connection parts
    pub fn from_parts(
        endpoint: String,
        index: String,
        username: String,
        password: String,
        insecure_tls: bool,
        timeout_secs: u64,
    ) -> SearchResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .danger_accept_invalid_certs(insecure_tls)
            .build()
            .map_err(|e| SearchError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            index,
            username,
            password,
            timeout_secs,
        })
    }

    /// Name of the index this client searches
    pub fn index(&self) -> &str {
        &self.index
    }

    /// POST a `_search` body to the configured index
    pub async fn execute(&self, body: &Value) -> SearchResult<EngineResponse> {
        let url = format!("{}/{}/_search", self.endpoint, self.index);

        debug!(url = %url, "Executing engine search");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(self.timeout_secs)
                } else {
                    SearchError::ExecutionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::EngineStatus {
                status: status.as_u16(),
                body: if body.is_empty() {
                    "no response body".to_string()
                } else {
                    body
                },
            });
        }

        response
            .json::<EngineResponse>()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }
}
