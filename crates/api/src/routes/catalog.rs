use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Catalog routes, mounted under `/api`.
///
/// ```text
/// GET /catalog/{category}?style=&location=&cursor=
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/catalog/{category}", get(handlers::catalog::get_catalog))
}
