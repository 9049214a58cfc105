//! Chat API client: the provider trait and an OpenAI-compatible implementation

use crate::config::Config;
use crate::error::{AppError, Result};
use futures_util::{Stream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, instrument};

/// Stream of response tokens in arrival order.
///
/// Tokens may be empty when a network chunk carried no printable content;
/// exhaustion of the stream is the end-of-response signal.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// A chat completion backend.
///
/// The demos depend only on this shape: a blocking call that resolves to the
/// final response text, and a streaming call that yields tokens as they
/// arrive until the response is finished.
#[allow(async_fn_in_trait)]
pub trait ChatProvider {
    /// Request a completion and return the final response text.
    async fn complete(&self, messages: &[Message]) -> Result<String>;

    /// Request a streaming completion.
    async fn complete_stream(&self, messages: &[Message]) -> Result<TokenStream>;
}

/// Role in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Chat completions request
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

/// Response choice
#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
    finish_reason: Option<String>,
}

/// Chat completions response
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

/// Streaming response chunk (one SSE `data:` payload)
#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

/// Choice in a streaming response
#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

/// Delta content in a streaming response
#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// API error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    code: Option<String>,
}

/// Client for any OpenAI-compatible chat completions endpoint
pub struct OpenAIClient {
    client: Client,
    config: Config,
}

impl OpenAIClient {
    /// Create a new client from the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Post a completion request and surface API-level failures as errors
    #[instrument(skip(self, messages))]
    async fn send_request(&self, messages: &[Message], stream: bool) -> Result<reqwest::Response> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: 0.7,
            stream,
        };

        debug!(stream, "Sending completion request");

        let response = self
            .client
            .post(self.config.api_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()?),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await?;

            // Try to parse as a structured error response
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_text) {
                return match error_response.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(AppError::RateLimitExceeded),
                    _ => Err(AppError::ApiError {
                        message: error_response.error.message,
                    }),
                };
            }

            return Err(AppError::ApiError {
                message: format!("API request failed with status {status}: {error_text}"),
            });
        }

        Ok(response)
    }
}

impl ChatProvider for OpenAIClient {
    async fn complete(&self, messages: &[Message]) -> Result<String> {
        let response = self.send_request(messages, false).await?;
        let response: CompletionResponse = response.json().await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ApiError {
                message: "No response choices available".to_string(),
            })?;

        if choice.finish_reason.as_deref() == Some("length") {
            return Err(AppError::TokenLimitExceeded);
        }

        Ok(choice.message.content)
    }

    async fn complete_stream(&self, messages: &[Message]) -> Result<TokenStream> {
        let response = self.send_request(messages, true).await?;

        let chunk_stream = response.bytes_stream().map(|chunk| match chunk {
            Ok(bytes) => Ok(extract_stream_content(&String::from_utf8_lossy(&bytes))),
            Err(e) => Err(AppError::from(e)),
        });

        Ok(Box::pin(chunk_stream))
    }
}

/// Pull the content deltas out of one SSE network chunk.
///
/// A chunk can carry several `data:` lines. The `[DONE]` marker and frames
/// that fail to decode are skipped; the stream itself signals completion by
/// ending.
fn extract_stream_content(text: &str) -> String {
    let mut content = String::new();

    for line in text.lines() {
        if let Some(data) = line.strip_prefix("data: ") {
            if data == "[DONE]" {
                continue;
            }

            if let Ok(chunk) = serde_json::from_str::<StreamChunk>(data) {
                for choice in chunk.choices {
                    if let Some(delta_content) = choice.delta.content {
                        content.push_str(&delta_content);
                    }
                }
            }
        }
    }

    content
}
