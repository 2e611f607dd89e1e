//! LLM provider client library.
//!
//! Provides the [`ChatCompletion`] trait that request handlers depend on,
//! the chat message types, and an OpenRouter implementation built on
//! [`reqwest`].

pub mod config;
pub mod messages;
pub mod openrouter;

use async_trait::async_trait;

pub use config::LlmConfig;
pub use messages::{ChatMessage, CompletionRequest};
pub use openrouter::OpenRouterClient;

/// Errors from the LLM provider layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered without any completion text.
    #[error("Provider returned an empty completion")]
    EmptyResponse,

    /// No API key is configured, so the provider cannot be called.
    #[error("LLM provider is not configured: {0}")]
    NotConfigured(String),
}

/// A chat-completion backend.
///
/// Implemented by [`OpenRouterClient`] in production and by stubs in tests.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Run one completion and return the assistant's text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}
