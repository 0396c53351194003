use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};
use crate::models::PatchOperation;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// PATCH /students/{id}/update-partial handler - Partially update a student
///
/// Applies the ordered patch batch to a transient copy first; the stored
/// record only changes when every operation applies cleanly and the result
/// passes validation.
#[utoipa::path(
    patch,
    path = routes::STUDENT_UPDATE_PARTIAL,
    params(
        ("id" = i32, Path, description = "Id of the student to patch")
    ),
    request_body = [PatchOperation],
    responses(
        (status = 204, description = "Student patched"),
        (status = 400, description = "Empty patch, non-positive id, or failed validation", body = ValidationErrorResponse),
        (status = 404, description = "No matching student", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn update_student_partial_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Option<Vec<PatchOperation>>>,
) -> Result<StatusCode, ApiError> {
    let Some(ops) = body else {
        tracing::warn!("Rejected null patch document for id: {}", id);
        return Err(ApiError::BadInput(
            "Patch document must not be null".to_string(),
        ));
    };
    tracing::info!("Patching student with id: {} ({} op(s))", id, ops.len());

    if id <= 0 {
        tracing::warn!("Rejected patch with non-positive id: {}", id);
        return Err(ApiError::BadInput(format!(
            "Student id must be positive, got {}",
            id
        )));
    }
    if ops.is_empty() {
        tracing::warn!("Rejected empty patch document for id: {}", id);
        return Err(ApiError::BadInput(
            "Patch document must contain at least one operation".to_string(),
        ));
    }

    let mut store = state.store.write().await;
    match store.apply_patch(id, &ops) {
        None => {
            tracing::error!("Student not found with id: {}", id);
            Err(ApiError::NotFound(format!(
                "The student with id {} is not found",
                id
            )))
        }
        Some(Err(violations)) => {
            tracing::warn!(
                "Patch rejected: result failed validation with {} violation(s)",
                violations.len()
            );
            Err(ApiError::ValidationFailed(violations))
        }
        Some(Ok(_)) => {
            tracing::info!("Patched student with id: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
    }
}
