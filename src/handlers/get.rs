use crate::error::{ApiError, ErrorResponse};
use crate::models::StudentTransfer;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /students/{key} handler - Retrieve one student by id or by name
///
/// The path position serves both lookups: a key that parses as an integer is
/// treated as an id, anything else as an exact-match name.
#[utoipa::path(
    get,
    path = routes::STUDENT_BY_KEY,
    params(
        ("key" = String, Path, description = "Student id (integer) or exact student name")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentTransfer),
        (status = 400, description = "Non-positive id or empty name", body = ErrorResponse),
        (status = 404, description = "No matching student", body = ErrorResponse)
    ),
    tag = "students"
)]
pub async fn get_student_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<StudentTransfer>), ApiError> {
    match key.parse::<i32>() {
        Ok(id) => get_by_id(&state, id).await,
        Err(_) => get_by_name(&state, &key).await,
    }
}

async fn get_by_id(
    state: &AppState,
    id: i32,
) -> Result<(StatusCode, Json<StudentTransfer>), ApiError> {
    tracing::info!("Looking up student by id: {}", id);

    if id <= 0 {
        tracing::warn!("Rejected lookup with non-positive id: {}", id);
        return Err(ApiError::BadInput(format!(
            "Student id must be positive, got {}",
            id
        )));
    }

    let store = state.store.read().await;
    match store.get_by_id(id) {
        Some(record) => Ok((StatusCode::OK, Json(StudentTransfer::from_record(record)))),
        None => {
            tracing::error!("Student not found with id: {}", id);
            Err(ApiError::NotFound(format!(
                "The student with id {} is not found",
                id
            )))
        }
    }
}

async fn get_by_name(
    state: &AppState,
    name: &str,
) -> Result<(StatusCode, Json<StudentTransfer>), ApiError> {
    tracing::info!("Looking up student by name: {}", name);

    if name.is_empty() {
        tracing::warn!("Rejected lookup with empty name");
        return Err(ApiError::BadInput(
            "Student name must not be empty".to_string(),
        ));
    }

    let store = state.store.read().await;
    match store.get_by_name(name) {
        Some(record) => Ok((StatusCode::OK, Json(StudentTransfer::from_record(record)))),
        None => {
            tracing::error!("Student not found with name: {}", name);
            Err(ApiError::NotFound(format!(
                "The student with name {} is not found",
                name
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::StudentStore;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };
        let state = AppState::new(StudentStore::seeded(), config);

        Router::new()
            .route(crate::routes::STUDENT_BY_KEY, get(get_student_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_get_by_id_success() {
        let app = setup_test_app();

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

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let student: StudentTransfer = serde_json::from_slice(&body).unwrap();
        assert_eq!(student.id, 1);
        assert_eq!(student.student_name, "Tyan");
        assert_eq!(student.address, "12 Melbourne");
    }

    #[tokio::test]
    async fn test_get_by_id_non_positive() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/students/0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("must be positive"));
    }

    #[tokio::test]
    async fn test_get_by_id_negative() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/students/-5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/students/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("id 99"));
    }

    #[tokio::test]
    async fn test_get_by_name_success() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/students/Scul")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let student: StudentTransfer = serde_json::from_slice(&body).unwrap();
        assert_eq!(student.id, 2);
        assert_eq!(student.student_name, "Scul");
    }

    #[tokio::test]
    async fn test_get_by_name_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/students/Nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
