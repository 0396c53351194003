use crate::models::StudentTransfer;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /students/all handler - List all students
///
/// Projects every stored record into its wire representation, in insertion
/// order. Never fails.
#[utoipa::path(
    get,
    path = routes::STUDENTS_ALL,
    responses(
        (status = 200, description = "All students", body = [StudentTransfer])
    ),
    tag = "students"
)]
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<StudentTransfer>>) {
    tracing::info!("Listing all students");

    let store = state.store.read().await;
    let students: Vec<StudentTransfer> = store
        .list()
        .iter()
        .map(StudentTransfer::from_record)
        .collect();

    tracing::info!("Listed {} students", students.len());
    (StatusCode::OK, Json(students))
}
