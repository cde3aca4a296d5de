use async_trait::async_trait;

use sayyes_core::conversation::Message;
use sayyes_core::generator::{persona_prompt, LocalRules, TextGenerator, Topic};

use crate::client::CompletionClient;

/// [`TextGenerator`] that asks a language model first and answers from
/// [`LocalRules`] when the call fails.
pub struct LlmBacked {
    client: CompletionClient,
    fallback: LocalRules,
}

impl LlmBacked {
    pub fn new(client: CompletionClient) -> Self {
        Self {
            client,
            fallback: LocalRules,
        }
    }
}

#[async_trait]
impl TextGenerator for LlmBacked {
    async fn generate(&self, topic: Topic, history: &[Message]) -> String {
        match self.client.complete(&persona_prompt(topic), history).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    topic = topic.as_str(),
                    model = self.client.model(),
                    "Completion failed, using local rules"
                );
                self.fallback.reply(topic, history)
            }
        }
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
