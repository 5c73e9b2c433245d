//! Health handler

use axum::{extract::State, Json};

use crate::{dto::health::HealthResponse, AppState};

/// Report liveness and the active repository backend
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: state.item_service.repository().name().to_string(),
    })
}
