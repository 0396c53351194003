use crate::error::{ApiError, ValidationErrorResponse};
use crate::models::StudentTransfer;
use crate::routes;
use crate::state::AppState;
use crate::validation;
use axum::{
    Json,
    extract::State,
    http::{HeaderName, StatusCode, header},
};

/// POST /students/create handler - Create a new student
///
/// Validates the payload, assigns the next id, and answers 201 with the
/// created projection plus a Location header for fetching it. Any
/// caller-supplied id is ignored.
#[utoipa::path(
    post,
    path = routes::STUDENTS_CREATE,
    request_body = StudentTransfer,
    responses(
        (status = 201, description = "Student created", body = StudentTransfer),
        (status = 400, description = "Payload failed validation", body = ValidationErrorResponse)
    ),
    tag = "students"
)]
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(body): Json<Option<StudentTransfer>>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<StudentTransfer>), ApiError> {
    let Some(transfer) = body else {
        tracing::warn!("Create rejected: null body");
        return Err(ApiError::BadInput("Request body must not be null".to_string()));
    };
    tracing::info!("Creating student: {}", transfer.student_name);

    let violations = validation::validate(&transfer);
    if !violations.is_empty() {
        tracing::warn!(
            "Create rejected: payload failed validation with {} violation(s)",
            violations.len()
        );
        return Err(ApiError::ValidationFailed(violations));
    }

    let mut store = state.store.write().await;
    let record = store.insert(transfer.into_fields());
    let created = StudentTransfer::from_record(record);

    tracing::info!("Created student with id: {}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/students/{}", created.id))],
        Json(created),
    ))
}
