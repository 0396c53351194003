use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// Upper routing bound on deletable ids; requests above it behave like an
/// unmatched route.
pub const DELETE_MAX_ID: i32 = 100;

/// DELETE /students/delete/{id} handler - Remove a student
#[utoipa::path(
    delete,
    path = routes::STUDENTS_DELETE,
    params(
        ("id" = i32, Path, description = "Id of the student to delete, bounded to 1..=100")
    ),
    responses(
        (status = 200, description = "Student deleted", body = bool),
        (status = 400, description = "Non-positive id", body = ErrorResponse),
        (status = 404, description = "No matching student or id above bound", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<bool>), ApiError> {
    tracing::info!("Deleting student with id: {}", id);

    if id <= 0 {
        tracing::warn!("Rejected delete with non-positive id: {}", id);
        return Err(ApiError::BadInput(format!(
            "Student id must be positive, got {}",
            id
        )));
    }
    if id > DELETE_MAX_ID {
        tracing::warn!("Rejected delete with id above routing bound: {}", id);
        return Err(ApiError::NotFound(format!(
            "The student with id {} is not found",
            id
        )));
    }

    let mut store = state.store.write().await;
    if store.remove(id) {
        tracing::info!("Deleted student with id: {}", id);
        Ok((StatusCode::OK, Json(true)))
    } else {
        tracing::error!("Student not found with id: {}", id);
        Err(ApiError::NotFound(format!(
            "The student with id {} is not found",
            id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::get_student_handler;
    use crate::store::StudentStore;
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{delete, get},
    };
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        let state = AppState::new(StudentStore::seeded(), config);

        Router::new()
            .route(crate::routes::STUDENTS_DELETE, delete(delete_student_handler))
            .route(crate::routes::STUDENT_BY_KEY, get(get_student_handler))
            .with_state(state)
    }

    fn delete_student(id: i32) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/students/delete/{}", id))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_delete_removes_student() {
        let app = setup_test_app();

        let response = app.clone().oneshot(delete_student(1)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let deleted: bool = serde_json::from_slice(&body).unwrap();
        assert!(deleted);

        // A subsequent lookup misses.
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/students/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_non_positive_id_rejected() {
        let app = setup_test_app();

        let response = app.oneshot(delete_student(0)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_missing_student_not_found() {
        let app = setup_test_app();

        let response = app.oneshot(delete_student(99)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_above_routing_bound_not_found() {
        let app = setup_test_app();

        let response = app.oneshot(delete_student(101)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
