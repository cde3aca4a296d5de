//! Integration tests for the completion client against an in-process fake
//! endpoint.

use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use sayyes_core::conversation::Message;
use sayyes_core::generator::{TextGenerator, Topic};
use sayyes_llm::{CompletionClient, LlmBacked, LlmConfig, LlmError};

/// Serve `router` on an ephemeral port and return its `/v1` base URL.
async fn spawn_endpoint(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn config(base_url: String) -> LlmConfig {
    LlmConfig {
        api_key: "test-key".to_string(),
        base_url,
        model: "test-model".to_string(),
        temperature: 0.7,
        timeout: Duration::from_millis(500),
    }
}

/// Fake endpoint that describes the request it received.
async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let messages = body["messages"].as_array().cloned().unwrap_or_default();
    let summary = format!(
        "model={} auth={} count={} first={} last={}",
        body["model"].as_str().unwrap_or_default(),
        auth,
        messages.len(),
        messages.first().map_or("", |m| m["role"].as_str().unwrap_or_default()),
        messages.last().map_or("", |m| m["content"].as_str().unwrap_or_default()),
    );
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": format!("  {summary}  ") } }]
    }))
}

fn history() -> Vec<Message> {
    vec![
        Message::user("hi"),
        Message::assistant("hey!"),
        Message::user("tell me about dates"),
    ]
}

// ---------------------------------------------------------------------------
// Test: system prompt, history and bearer token reach the endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_sends_prompt_history_and_token() {
    let router = Router::new().route("/v1/chat/completions", post(echo_completion));
    let client = CompletionClient::new(&config(spawn_endpoint(router).await)).unwrap();

    let text = client.complete("be brief", &history()).await.unwrap();

    assert_eq!(
        text,
        "model=test-model auth=Bearer test-key count=4 first=system last=tell me about dates"
    );
}

// ---------------------------------------------------------------------------
// Test: non-2xx status maps to ApiError with the body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_maps_to_api_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let client = CompletionClient::new(&config(spawn_endpoint(router).await)).unwrap();

    let err = client.complete("p", &history()).await.unwrap_err();

    assert_matches!(err, LlmError::ApiError { status: 429, ref body } if body == "quota exceeded");
}

// ---------------------------------------------------------------------------
// Test: a response with no choices is an EmptyCompletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_choices_is_empty_completion() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let client = CompletionClient::new(&config(spawn_endpoint(router).await)).unwrap();

    let err = client.complete("p", &history()).await.unwrap_err();

    assert_matches!(err, LlmError::EmptyCompletion);
}

// ---------------------------------------------------------------------------
// Test: whitespace-only content is an EmptyCompletion, and LlmBacked falls back
// ---------------------------------------------------------------------------

#[tokio::test]
async fn whitespace_only_content_is_empty_completion() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [{ "message": { "content": " \n\t " } }] })) }),
    );
    let base = spawn_endpoint(router).await;
    let client = CompletionClient::new(&config(base.clone())).unwrap();

    let err = client.complete("p", &history()).await.unwrap_err();
    assert_matches!(err, LlmError::EmptyCompletion);

    let generator = LlmBacked::new(CompletionClient::new(&config(base)).unwrap());
    let text = generator.generate(Topic::Dresses, &history()).await;
    assert_eq!(text, "These dresses are giving MAIN CHARACTER energy! ✨");
}

// ---------------------------------------------------------------------------
// Test: slow endpoint hits the configured deadline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_endpoint_times_out() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "choices": [] }))
        }),
    );
    let client = CompletionClient::new(&config(spawn_endpoint(router).await)).unwrap();

    let err = client.complete("p", &history()).await.unwrap_err();

    assert_matches!(err, LlmError::Request(e) if e.is_timeout());
}

// ---------------------------------------------------------------------------
// Test: LlmBacked returns model text on success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backed_generator_returns_model_text() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            Json(json!({ "choices": [{ "message": { "content": "Venues galore! 🏰" } }] }))
        }),
    );
    let client = CompletionClient::new(&config(spawn_endpoint(router).await)).unwrap();
    let generator = LlmBacked::new(client);

    let text = generator.generate(Topic::Venues, &history()).await;

    assert_eq!(text, "Venues galore! 🏰");
    assert_eq!(generator.name(), "llm");
}

// ---------------------------------------------------------------------------
// Test: LlmBacked degrades to local rules when the endpoint fails
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backed_generator_falls_back_to_local_rules() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = CompletionClient::new(&config(spawn_endpoint(router).await)).unwrap();
    let generator = LlmBacked::new(client);

    let text = generator.generate(Topic::General, &history()).await;
    assert!(text.starts_with("When are you thinking"), "got: {text}");

    let text = generator.generate(Topic::Cakes, &history()).await;
    assert_eq!(text, "Here are some delicious wedding cake designs! 🎂");
}
