//! HTTP client for the dictionary service.

use crate::config::ApiConfig;
use std::time::Duration;
use tracing::debug;
use udbot_common::{DefineResponse, Definition, LookupError};

/// Thin client over the two dictionary endpoints.
///
/// Holds its own `reqwest::Client`; endpoints come from configuration
/// so tests can aim at a local double. One GET per call, no retries.
pub struct DictClient {
    http: reqwest::Client,
    define_url: String,
    random_url: String,
}

impl DictClient {
    /// Create a client from service configuration.
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(api.timeout_secs))
                .build()
                .unwrap_or_default(),
            define_url: api.define_url.clone(),
            random_url: api.random_url.clone(),
        }
    }

    /// Look up a specific term via the define endpoint.
    pub async fn define(&self, term: &str) -> Result<Vec<Definition>, LookupError> {
        self.fetch(self.http.get(&self.define_url).query(&[("term", term)]))
            .await
    }

    /// Fetch a random batch of definitions.
    pub async fn random(&self) -> Result<Vec<Definition>, LookupError> {
        self.fetch(self.http.get(&self.random_url)).await
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<Vec<Definition>, LookupError> {
        let response = request
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(LookupError::ServiceUnavailable {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        debug!("Result: {}", text);

        let parsed: DefineResponse =
            serde_json::from_str(&text).map_err(|_| LookupError::MalformedResponse)?;
        Ok(parsed.list)
    }
}
