use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Reports the number of items currently held in memory and the store file.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let items = state.store.count().await;
    tracing::debug!("Health check passed ({} items)", items);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            items,
            store_file: state.config.store_path.display().to_string(),
        }),
    )
}
