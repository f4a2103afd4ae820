//! OpenAI image client
//!
//! Calls `POST {api_base}/images/generations` with a bearer key.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::core::models::openai::{ImageGenerationRequest, ImageGenerationResponse};
use crate::core::providers::{ImageProvider, ProviderError};

const PROVIDER: &str = "openai";

/// OpenAI Images API client
#[derive(Clone)]
pub struct OpenAIImageClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

impl std::fmt::Debug for OpenAIImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIImageClient")
            .field("api_base", &self.api_base)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Error body returned by the API on non-2xx answers
#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorDetail {
    message: String,
}

impl OpenAIImageClient {
    /// Create a client from provider configuration
    ///
    /// A missing API key is not an error here; calls fail with a configuration error instead.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ProviderError::configuration(PROVIDER, e.to_string()))?;

        if config.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; image generation requests will fail");
        }

        Ok(Self::with_client(
            http,
            config.api_key.clone(),
            config.api_base.clone(),
        ))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(
        http: reqwest::Client,
        api_key: Option<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.filter(|key| !key.is_empty()),
            api_base: api_base.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.api_base.trim_end_matches('/'))
    }

    fn map_transport_error(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::timeout(PROVIDER, err.to_string())
        } else {
            ProviderError::network(PROVIDER, err.to_string())
        }
    }
}

#[async_trait]
impl ImageProvider for OpenAIImageClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::configuration(PROVIDER, "API key is not configured"))?;

        debug!(model = %request.model, size = %request.size, "Calling OpenAI images endpoint");

        let response = self
            .http
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Self::map_transport_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<OpenAIErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(ProviderError::from_status(PROVIDER, status.as_u16(), message));
        }

        serde_json::from_slice(&body)
            .map_err(|e| ProviderError::response_parsing(PROVIDER, e.to_string()))
    }
}
