mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;
mod validation;

use anyhow::Context;
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;
use store::StudentStore;

fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::DEMO, get(handlers::demo_handler))
        .route(routes::STUDENTS_ALL, get(handlers::list_students_handler))
        .route(routes::STUDENT_BY_KEY, get(handlers::get_student_handler))
        .route(routes::STUDENTS_CREATE, post(handlers::create_student_handler))
        .route(routes::STUDENTS_UPDATE, put(handlers::update_student_handler))
        .route(
            routes::STUDENT_UPDATE_PARTIAL,
            patch(handlers::update_student_partial_handler),
        )
        .route(routes::STUDENTS_DELETE, delete(handlers::delete_student_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("student-registry-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = config.bind_addr();
    let state = AppState::new(StudentStore::seeded(), config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
