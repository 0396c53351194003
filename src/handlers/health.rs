use crate::error::HealthResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The service holds all of its data in process memory and has no external
/// dependency to probe, so a reachable process is a healthy one.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
