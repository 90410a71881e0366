//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage_ok = state.site_service.storage_available().await;

    Json(HealthResponse {
        status: if storage_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: if storage_ok { "available" } else { "unavailable" }.to_string(),
        active_sessions: state.session_manager.session_count(),
    })
}
