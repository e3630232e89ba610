use super::{AssistGateway, AssistRequest, AssistResponse};
use crate::error::SkaitchError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Connection settings for a hosted generation backend
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Full URL of the assist endpoint
    pub endpoint: String,
    /// Bearer token; an empty string means the gateway is unconfigured
    pub api_key: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl GatewayConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout_seconds: 60,
        }
    }

    /// Reads `SKAITCH_AI_ENDPOINT` and `SKAITCH_AI_API_KEY` from the
    /// environment; missing variables leave the gateway unconfigured
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("SKAITCH_AI_ENDPOINT").unwrap_or_default(),
            api_key: std::env::var("SKAITCH_AI_API_KEY").unwrap_or_default(),
            timeout_seconds: 60,
        }
    }
}

/// An [`AssistGateway`] that posts requests as JSON to a hosted endpoint
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
    client: Client,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, SkaitchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SkaitchError::Gateway(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl AssistGateway for HttpGateway {
    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty() && !self.config.endpoint.is_empty()
    }

    async fn submit(&self, request: AssistRequest) -> Result<AssistResponse, SkaitchError> {
        if !self.is_configured() {
            return Err(SkaitchError::NotConfigured);
        }

        log::debug!("submitting {} assist request", request.operation);
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SkaitchError::Gateway(e.to_string()))?;

        match response.status() {
            StatusCode::BAD_REQUEST => {
                log::warn!("assist backend rejected operation {}", request.operation);
                Err(SkaitchError::UnsupportedOperation(
                    request.operation.to_string(),
                ))
            }
            StatusCode::SERVICE_UNAVAILABLE => Err(SkaitchError::NotConfigured),
            status if status.is_success() => {
                let body: AssistResponse = response
                    .json()
                    .await
                    .map_err(|e| SkaitchError::Gateway(e.to_string()))?;
                Ok(body)
            }
            status => Err(SkaitchError::Gateway(format!(
                "assist backend returned {status}"
            ))),
        }
    }
}
