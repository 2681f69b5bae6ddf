//! Storage statistics handler.

use axum::Json;
use axum::extract::State;

use filevault_entity::storage::StorageUsage;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /stats
pub async fn storage_stats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<StorageUsage>, ApiError> {
    Ok(Json(state.stats_service.usage(user_id).await?))
}
