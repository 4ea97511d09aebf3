/// LLM Client — the single point of entry for hosted model calls.
///
/// No other module talks to the model API directly. Callers receive plain text
/// and decide themselves what to do when the call fails.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Suggestions are a few sentences; keep responses short.
const MAX_TOKENS: u32 = 512;
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const MAX_ATTEMPTS_CAP: u32 = 10;
const BASE_BACKOFF_MS: u64 = 500;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessagesResponse {
    /// First non-blank text block, trimmed.
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text)
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Messages API client with bounded retries on 429, 5xx and transport errors.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_attempts: u32,
}

impl LlmClient {
    pub fn new(api_key: String, model: String) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            model,
            endpoint: ANTHROPIC_API_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Points the client at a different Messages-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Clamped to 1..=10.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.clamp(1, MAX_ATTEMPTS_CAP);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single-turn prompt and returns the model's text.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 1;
        loop {
            let error = match self
                .client
                .post(&self.endpoint)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&request_body)
                .send()
                .await
            {
                Err(e) => LlmError::Http(e),
                Ok(response) => {
                    let status = response.status();

                    if status.as_u16() == 429 || status.is_server_error() {
                        let body = response.text().await.unwrap_or_default();
                        warn!("LLM API returned {}: {}", status, body);
                        LlmError::Api {
                            status: status.as_u16(),
                            message: body,
                        }
                    } else if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                            .map(|e| e.error.message)
                            .unwrap_or(body);
                        return Err(LlmError::Api {
                            status: status.as_u16(),
                            message,
                        });
                    } else {
                        let parsed: MessagesResponse = response.json().await?;
                        debug!(
                            "LLM call succeeded: input_tokens={}, output_tokens={}",
                            parsed.usage.input_tokens, parsed.usage.output_tokens
                        );
                        return parsed.into_text().ok_or(LlmError::EmptyContent);
                    }
                }
            };

            if attempt >= self.max_attempts {
                return Err(error);
            }

            let delay = backoff(attempt);
            warn!(
                "LLM attempt {} failed, retrying in {}ms",
                attempt,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Delay after the given failed attempt: 500ms, 1s, 2s, ...
fn backoff(attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(MAX_ATTEMPTS_CAP);
    Duration::from_millis(BASE_BACKOFF_MS << exponent)
}
