//! File search handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::FileListResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, QueryValues, SearchParams};
use crate::state::AppState;

/// GET /search
pub async fn search_files(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: QueryValues,
) -> Result<Json<FileListResponse>, ApiError> {
    let (filters, page) = SearchParams::from(query).into_parts();
    let result = state.search_service.search(user_id, filters, page).await?;
    Ok(Json(result.into()))
}
