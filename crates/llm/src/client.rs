//! REST client for an OpenAI-compatible chat-completions endpoint.
//!
//! Sends a system prompt followed by the conversation history and returns
//! the first choice's message content.

use serde::{Deserialize, Serialize};

use sayyes_core::conversation::Message;

use crate::config::LlmConfig;

/// Errors from the completion API layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The endpoint answered but produced no usable text.
    #[error("Completion API returned no content")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for one completion endpoint.
pub struct CompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl CompletionClient {
    /// Build a client whose requests are bounded by `config.timeout`.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a completion for `history` under `system_prompt`.
    ///
    /// Sends `POST {base_url}/chat/completions` and returns the trimmed
    /// content of the first choice.
    pub async fn complete(
        &self,
        system_prompt: &str,
        history: &[Message],
    ) -> Result<String, LlmError> {
        let body = request_body(&self.model, self.temperature, system_prompt, history);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: CompletionResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }

    // ---- private helpers ----

    /// Return the response unchanged on a 2xx status, otherwise an
    /// [`LlmError::ApiError`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Chat-completions body: the system prompt followed by every history turn.
fn request_body<'a>(
    model: &'a str,
    temperature: f32,
    system_prompt: &'a str,
    history: &'a [Message],
) -> CompletionRequest<'a> {
    let messages = std::iter::once(ChatMessage {
        role: "system",
        content: system_prompt,
    })
    .chain(history.iter().map(|m| ChatMessage {
        role: m.role.as_str(),
        content: &m.content,
    }))
    .collect();

    CompletionRequest {
        model,
        temperature,
        messages,
    }
}
