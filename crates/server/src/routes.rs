use axum::{
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod students;

/// Shared request state. The store connection is constructed at startup and
/// injected here; handlers never reach for a global handle.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn api_not_found() -> ApiError {
    ApiError::not_found("API not found")
}

/// Build the full application router: student CRUD, health, API docs and a
/// JSON 404 fallback for everything else.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let students = Router::new()
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:regNo",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        );

    Router::new()
        .route("/health", get(health))
        .merge(students)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(api_not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
