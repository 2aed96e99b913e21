//! Chat-completions client for advice enrichment
//!
//! Talks to an OpenAI-compatible endpoint (DashScope/Qwen exposes one).
//! The client makes a single bounded-timeout attempt and reports failures
//! as values; callers substitute their deterministic fallback. The API key
//! comes from configuration and is held as a `Secret`.

use crate::config::AiConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from the chat-completions call
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM integration is disabled")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    Api { status: u16 },

    #[error("Response contained no choices")]
    EmptyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Chat-completions client
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    enabled: bool,
}

impl LlmClient {
    pub fn new(config: &AiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: SecretString::new(config.api_key.clone()),
            enabled: config.enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Single-attempt chat completion
    ///
    /// Returns the first choice's content. No retries: the caller owns
    /// the fallback.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        if !self.enabled {
            return Err(LlmError::Disabled);
        }

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, "Requesting chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&ChatRequest {
                model: self.model.clone(),
                messages,
                temperature: 0.7,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LlmError::Api {
                status: response.status().as_u16(),
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        if content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(content)
    }
}
