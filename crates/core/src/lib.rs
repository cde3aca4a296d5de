//! Conversation core for the wedding-planning chat assistant.
//!
//! Holds the image catalog and its query service, the conversation state
//! and response payload types, the [`generator::TextGenerator`] capability,
//! and the keyword-driven state machine in [`engine`]. Nothing here performs
//! network I/O; language-model access is plugged in through the generator.

pub mod catalog;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod generator;
pub mod keywords;
pub mod payload;
