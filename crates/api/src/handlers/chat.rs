//! Handler for the conversational endpoint.
//!
//! The request body is decoded leniently and every outcome, including a
//! panic inside the step, is answered with a `200` payload.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use sayyes_core::conversation::ChatRequest;
use sayyes_core::payload::ResponsePayload;

use crate::state::AppState;

/// POST /api/chat
///
/// Body: `{ "messages": [{ "role", "content" }], "state": { flag: bool } }`.
/// Missing or malformed fields read as empty history / all-false state.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Json<ResponsePayload> {
    let ChatRequest {
        messages,
        state: conversation,
    } = ChatRequest::from_slice_lenient(&body);

    tracing::debug!(
        turns = messages.len(),
        seen_venues = conversation.seen_venues,
        seen_dresses = conversation.seen_dresses,
        seen_hairstyles = conversation.seen_hairstyles,
        "Chat request"
    );

    // Run the step on its own task so a panic degrades to an apology that
    // keeps the caller's flags.
    let engine = state.engine.clone();
    let payload = tokio::spawn(async move { engine.step(&messages, conversation).await })
        .await
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "Chat step failed");
            ResponsePayload::apology(conversation)
        });

    Json(payload)
}
