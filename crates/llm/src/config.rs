use std::time::Duration;

/// Language-model endpoint configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Endpoint base, without the `/chat/completions` suffix.
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Deadline for a single completion call.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `OPENAI_API_KEY` is unset or blank, which selects
    /// local rules instead of the language model.
    ///
    /// | Env Var            | Default                     |
    /// |--------------------|-----------------------------|
    /// | `OPENAI_API_KEY`   | (none)                      |
    /// | `LLM_BASE_URL`     | `https://api.openai.com/v1` |
    /// | `LLM_MODEL`        | `gpt-4`                     |
    /// | `LLM_TEMPERATURE`  | `0.7`                       |
    /// | `LLM_TIMEOUT_SECS` | `15`                        |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;

        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4".into());

        let temperature: f32 = std::env::var("LLM_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".into())
            .parse()
            .expect("LLM_TEMPERATURE must be a number");

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Some(Self {
            api_key,
            base_url,
            model,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
