pub mod catalog;
pub mod chat;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /chat                     one conversation step (POST)
/// /catalog/{category}       filtered catalog listing (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(chat::router())
        .merge(catalog::router())
}
