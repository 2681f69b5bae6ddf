//! File listing handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::FileListResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, QueryValues};
use crate::state::AppState;

/// GET /files
pub async fn list_files(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut query: QueryValues,
) -> Result<Json<FileListResponse>, ApiError> {
    let page = PaginationParams::from(&mut query).into_page_request();
    let result = state.search_service.list(user_id, page).await?;
    Ok(Json(result.into()))
}
