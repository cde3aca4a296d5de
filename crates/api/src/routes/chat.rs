use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Chat routes, mounted under `/api`.
///
/// ```text
/// POST /chat
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(handlers::chat::chat))
}
