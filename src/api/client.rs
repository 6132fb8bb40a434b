// src/api/client.rs
use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{Card, SearchRequest, SearchResponse};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// HTTP client for the property search service.
#[derive(Debug, Clone)]
pub struct PropertyClient {
    base_url: String,
    search_path: String,
    all_properties_path: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl PropertyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_path: config.search_path.clone(),
            all_properties_path: config.all_properties_path.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/search` with `{"query": ...}`.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.endpoint(&self.search_path)?;
        debug!("POST {} query={:?}", url, query);

        let mut request = self.client.post(url).json(&SearchRequest {
            query: query.to_string(),
        });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        Self::decode(request.send().await?).await
    }

    /// `GET /api/allProperties`.
    pub async fn all_properties(&self) -> Result<Vec<Card>> {
        let url = self.endpoint(&self.all_properties_path)?;
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        Self::decode(request.send().await?).await
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        reqwest::Url::parse(&joined).map_err(|e| ApiError::Url(format!("{}: {}", joined, e)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
