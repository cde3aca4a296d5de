use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use sayyes_core::catalog::{Category, QueryOptions};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/catalog/{category}
///
/// Filtered listing for one category. Unlike the chat flow, an unknown
/// category is a 404 here, and a query string that does not decode is a
/// JSON 400.
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(category): Path<String>,
    query: Result<Query<QueryOptions>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(options) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let category: Category = category.parse()?;
    let result = state.engine.catalog().query_category(category, &options);

    Ok(Json(DataResponse { data: result }))
}
