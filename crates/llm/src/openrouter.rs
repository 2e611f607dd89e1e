//! OpenRouter implementation of [`ChatCompletion`].

use std::time::Duration;

use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::messages::{CompletionRequest, CompletionResponse};
use crate::{ChatCompletion, LlmError};

/// HTTP client for the OpenRouter chat completions API.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenRouterClient {
    /// Create a client with its own connection pool and timeout.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Return the response unchanged on 2xx, or an [`LlmError::Api`]
    /// carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ChatCompletion for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            LlmError::NotConfigured("OPENROUTER_API_KEY is not set".to_string())
        })?;

        tracing::debug!(
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await?;

        let response = match Self::ensure_success(response).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(model = %request.model, error = %e, "Provider rejected request");
                return Err(e);
            }
        };

        let body: CompletionResponse = response.json().await?;
        let content = body.into_content().ok_or(LlmError::EmptyResponse)?;

        tracing::debug!(model = %request.model, chars = content.len(), "Received completion");
        Ok(content)
    }
}
