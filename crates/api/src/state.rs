use std::sync::Arc;

use sayyes_core::catalog::Catalog;
use sayyes_core::engine::ChatEngine;
use sayyes_core::generator::{LocalRules, TextGenerator};
use sayyes_llm::{CompletionClient, LlmBacked, LlmError};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Conversation state machine over the shared catalog and text generator.
    pub engine: ChatEngine,
}

impl AppState {
    /// Wire the catalog and the configured text generator.
    ///
    /// Uses the language model when `config.llm` is set, local rules
    /// otherwise. Fails only if the HTTP client cannot be constructed.
    pub fn from_config(config: ServerConfig) -> Result<Self, LlmError> {
        let catalog = Arc::new(Catalog::new(config.image_base_url.clone()));

        let generator: Arc<dyn TextGenerator> = match &config.llm {
            Some(llm) => {
                tracing::info!(
                    model = %llm.model,
                    base_url = %llm.base_url,
                    "Using language-model text generation"
                );
                Arc::new(LlmBacked::new(CompletionClient::new(llm)?))
            }
            None => {
                tracing::info!("OPENAI_API_KEY not set, using local text rules");
                Arc::new(LocalRules)
            }
        };

        Ok(Self {
            config: Arc::new(config),
            engine: ChatEngine::new(catalog, generator),
        })
    }
}
