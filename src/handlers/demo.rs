use crate::routes;
use axum::http::StatusCode;

/// GET /demo handler - Logging demo endpoint
///
/// Does nothing but emit an info-level event, demonstrating the logging
/// pipeline end to end.
#[utoipa::path(
    get,
    path = routes::DEMO,
    responses(
        (status = 200, description = "Demo message logged")
    ),
    tag = "demo"
)]
pub async fn demo_handler() -> StatusCode {
    tracing::info!("Demo endpoint invoked");
    StatusCode::OK
}
