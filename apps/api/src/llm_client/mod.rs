/// LLM Client — the single point of entry for all chat-completion calls.
///
/// Talks to Groq's OpenAI-compatible endpoint. Every call is a single attempt:
/// upstream failures are reported to the caller, never retried here.
///
/// Model: llama-3.1-8b-instant (hardcoded along with sampling parameters)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::chat::ChatMessage;

/// The model used for every interview turn.
pub const MODEL: &str = "llama-3.1-8b-instant";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 512;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Groq API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed Groq API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Groq API response contained no choices")]
    EmptyChoices,
}

impl LlmError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Http(e) if e.is_timeout())
    }
}

/// Backend seam for chat completion, so handlers can run against a fake.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends the full message list and returns the first choice's content.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Content of the first choice.
    pub fn into_text(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyChoices)
    }
}

/// Wraps the Groq chat-completion API.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, LlmError> {
        Self::with_timeout(api_url, api_key, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        api_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
        })
    }

    /// Makes one call to the completion endpoint and returns the parsed body.
    pub async fn call(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, LlmError> {
        let request_body = CompletionRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let mut request = self.client.post(&self.api_url).json(&request_body);
        // Without a key the upstream answers 401, which surfaces as LlmError::Api.
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Logged once, at the HTTP boundary.
        if status != reqwest::StatusCode::OK {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.call(messages).await?.into_text()
    }
}
