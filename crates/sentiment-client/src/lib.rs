//! HTTP client for the sentiment service.
//!
//! [`SentimentClient`] posts text to `{base_url}/analyze` and decodes the
//! [`Analysis`]. Callers that treat sentiment as optional use
//! [`SentimentClient::try_analyze`], which logs failures and yields `None`.

mod error;

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

pub use error::ClientError;
pub use sentiment_core::Analysis;

/// Request timeout used by [`SentimentClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client bound to one sentiment service base URL.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    base_url: String,
    http: reqwest::Client,
}

impl SentimentClient {
    /// Creates a client with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(SentimentClient { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the `ok` flag of `GET /health`.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self
            .http
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(ClientError::Request)?;
        let health: HealthBody = decode(response).await?;
        Ok(health.ok)
    }

    /// Analyzes `text` via `POST /analyze`.
    pub async fn analyze(&self, text: &str) -> Result<Analysis, ClientError> {
        let response = self
            .http
            .post(self.endpoint("analyze"))
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(ClientError::Request)?;
        decode(response).await
    }

    /// Like [`analyze`](Self::analyze), but logs the failure and returns
    /// `None` instead of an error.
    pub async fn try_analyze(&self, text: &str) -> Option<Analysis> {
        match self.analyze(text).await {
            Ok(analysis) => Some(analysis),
            Err(err) => {
                tracing::warn!(base_url = %self.base_url, "sentiment request failed: {}", err);
                None
            }
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[derive(Debug, Deserialize)]
struct HealthBody {
    ok: bool,
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await.map_err(ClientError::Request)?;

    if !status.is_success() {
        return Err(ClientError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(ClientError::Decode)
}
