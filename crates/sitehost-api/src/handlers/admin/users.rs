//! Admin user listing and tenant content deletion.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.admin_service.list_users(&admin).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// DELETE /admin/delete/{user}
pub async fn delete_user_site(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(user): Path<String>,
) -> Result<&'static str, ApiError> {
    state.admin_service.delete_tenant(&admin, &user).await?;
    Ok("User site deleted")
}
