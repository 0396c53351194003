use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, ValidationErrorResponse};
use crate::handlers;
use crate::models::{PatchOperation, StudentTransfer};
use crate::validation::{FieldViolation, ViolationKind};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "student-registry-api",
        version = "1.0.0",
        description = "A minimal in-memory student registry exposed over HTTP"
    ),
    paths(
        handlers::health::health_handler,
        handlers::demo::demo_handler,
        handlers::list::list_students_handler,
        handlers::get::get_student_handler,
        handlers::create::create_student_handler,
        handlers::update::update_student_handler,
        handlers::patch::update_student_partial_handler,
        handlers::delete::delete_student_handler
    ),
    components(
        schemas(
            StudentTransfer,
            PatchOperation,
            FieldViolation,
            ViolationKind,
            ErrorResponse,
            ValidationErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "demo", description = "Logging demo"),
        (name = "students", description = "Student registry operations")
    )
)]
pub struct ApiDoc;
