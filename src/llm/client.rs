use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiClient;

/// Failure modes of a single completion call, inspected at the call site to
/// choose the user-visible message.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication rejected (HTTP {status}); check llm.api_key in config or MOM_API_KEY")]
    Auth { status: u16 },

    #[error("rate limited by the completion API")]
    RateLimited,

    #[error("completion API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode completion response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("completion response did not contain any text")]
    EmptyCompletion,
}

impl LlmError {
    /// Classify an error status code. Bodies of error responses are passed
    /// along verbatim so the user sees what the API said.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => LlmError::Auth { status },
            429 => LlmError::RateLimited,
            _ => LlmError::Api {
                status,
                message: body.trim().to_string(),
            },
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One blocking request/response exchange with the hosted service.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai, gemini",
            other
        ),
    }
}
