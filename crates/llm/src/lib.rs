//! Language-model text generation for the chat assistant.
//!
//! [`client::CompletionClient`] talks to an OpenAI-compatible
//! `/chat/completions` endpoint; [`backed::LlmBacked`] wraps it as a
//! [`sayyes_core::generator::TextGenerator`] that degrades to local rules.

pub mod backed;
pub mod client;
pub mod config;

pub use backed::LlmBacked;
pub use client::{CompletionClient, LlmError};
pub use config::LlmConfig;
