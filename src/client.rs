use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::NetworkError;

/// Journal entry as sent to the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub title: String,
    pub location: String,
    pub weather: String,
    pub text: String,
}

impl JournalEntry {
    /// Builds an entry with every field trimmed.
    pub fn new(title: &str, location: &str, weather: &str, text: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            location: location.trim().to_string(),
            weather: weather.trim().to_string(),
            text: text.trim().to_string(),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Remote mood analysis. Implementations return the parsed JSON body of a
/// successful response; interpreting it is the projector's job.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, entry: &JournalEntry) -> Result<Value, NetworkError>;
}

pub struct HttpAnalysisClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .user_agent(concat!("mood-journal/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, NetworkError> {
        Self::new(cfg.endpoint.clone(), Duration::from_secs(cfg.timeout_secs))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, entry: &JournalEntry) -> Result<Value, NetworkError> {
        info!(endpoint = %self.endpoint, chars = entry.text.len(), "submitting journal entry");

        let response = self
            .client
            .post(&self.endpoint)
            .json(entry)
            .send()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%status, "analysis service responded");
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| NetworkError::MalformedBody(e.to_string()))
    }
}
