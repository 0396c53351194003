use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::validation::FieldViolation;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error response carrying field-level validation details
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub violations: Vec<FieldViolation>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Every failure a handler can detect maps to one of these kinds, which in
/// turn map to an HTTP status code and a JSON error body. All errors are
/// surfaced directly from the handler that detects them; none are retried
/// and none are fatal to the process.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing required data, out-of-range identifiers
    BadInput(String),
    /// No record matches the given key
    NotFound(String),
    /// Payload violates field rules; carries per-field details
    ValidationFailed(Vec<FieldViolation>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            ApiError::ValidationFailed(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    error: "Validation failed".to_string(),
                    violations,
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ViolationKind;

    #[tokio::test]
    async fn test_bad_input_maps_to_400() {
        let response = ApiError::BadInput("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_failed_carries_violations() {
        let violations = vec![FieldViolation {
            field: "studentName".to_string(),
            kind: ViolationKind::MissingField,
            message: "Student name is required".to_string(),
        }];

        let response = ApiError::ValidationFailed(violations).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ValidationErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.violations.len(), 1);
        assert_eq!(parsed.violations[0].field, "studentName");
    }
}
