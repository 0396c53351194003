use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};
use crate::models::StudentTransfer;
use crate::routes;
use crate::state::AppState;
use crate::validation;
use axum::{Json, extract::State, http::StatusCode};

/// PUT /students/update handler - Replace an existing student
///
/// The body carries the full transfer including the target id; all writable
/// fields are overwritten in place.
#[utoipa::path(
    put,
    path = routes::STUDENTS_UPDATE,
    request_body = StudentTransfer,
    responses(
        (status = 204, description = "Student replaced"),
        (status = 400, description = "Non-positive id or failed validation", body = ValidationErrorResponse),
        (status = 404, description = "No matching student", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn update_student_handler(
    State(state): State<AppState>,
    Json(body): Json<Option<StudentTransfer>>,
) -> Result<StatusCode, ApiError> {
    let Some(transfer) = body else {
        tracing::warn!("Replace rejected: null body");
        return Err(ApiError::BadInput("Request body must not be null".to_string()));
    };
    tracing::info!("Replacing student with id: {}", transfer.id);

    if transfer.id <= 0 {
        tracing::warn!("Rejected replace with non-positive id: {}", transfer.id);
        return Err(ApiError::BadInput(format!(
            "Student id must be positive, got {}",
            transfer.id
        )));
    }

    let violations = validation::validate(&transfer);
    if !violations.is_empty() {
        tracing::warn!(
            "Replace rejected: payload failed validation with {} violation(s)",
            violations.len()
        );
        return Err(ApiError::ValidationFailed(violations));
    }

    let id = transfer.id;
    let mut store = state.store.write().await;
    match store.replace(id, transfer.into_fields()) {
        Some(_) => {
            tracing::info!("Replaced student with id: {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::error!("Student not found with id: {}", id);
            Err(ApiError::NotFound(format!(
                "The student with id {} is not found",
                id
            )))
        }
    }
}
