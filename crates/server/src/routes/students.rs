use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use service::errors::ServiceError;
use service::pagination::Pagination;
use service::student_service::{self, CreateStudent, UpdateStudent};

use crate::errors::ApiError;
use crate::routes::ServerState;

// The two 400 envelopes differ in capitalization; both forms are part of
// the published contract, so they stay distinct.
const CREATE_LIST_ERROR: &str = "Something Went Wrong!";
const MUTATE_ERROR: &str = "Something went wrong!";

fn failure(envelope: &str, err: ServiceError) -> ApiError {
    match err {
        ServiceError::NotFound(msg) => ApiError::not_found(msg),
        other => ApiError::bad_request(envelope, other.to_string()),
    }
}

// Paging values arrive as raw strings so a malformed `?page=abc` falls back
// to the defaults instead of being rejected by the query extractor.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.as_deref().and_then(|v| v.parse().ok()).unwrap_or(1),
            per_page: self.limit.as_deref().and_then(|v| v.parse().ok()).unwrap_or(10),
        }
    }
}

#[utoipa::path(post, path = "/students", tag = "students",
    request_body = crate::openapi::CreateStudentDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation or conflict")))]
pub async fn create_student(
    State(state): State<ServerState>,
    Json(input): Json<CreateStudent>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = student_service::create_student(&state.db, input)
        .await
        .map_err(|e| failure(CREATE_LIST_ERROR, e))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Student created successfully", "data": created })),
    ))
}

#[utoipa::path(get, path = "/students", tag = "students",
    params(("page" = Option<String>, Query, description = "1-based page, default 1"),
           ("limit" = Option<String>, Query, description = "page size, default 10")),
    responses((status = 200, description = "Active students page")))]
pub async fn list_students(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let students = student_service::list_active_students(&state.db, query.pagination())
        .await
        .map_err(|e| failure(CREATE_LIST_ERROR, e))?;
    Ok(Json(json!({
        "message": "Active students data retrieved successfully",
        "data": students
    })))
}

#[utoipa::path(get, path = "/students/{regNo}", tag = "students",
    params(("regNo" = String, Path, description = "registration number")),
    responses((status = 200, description = "Student"), (status = 404, description = "Missing or inactive")))]
pub async fn get_student(
    State(state): State<ServerState>,
    Path(reg_no): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let student = student_service::get_student(&state.db, &reg_no)
        .await
        .map_err(|e| failure(MUTATE_ERROR, e))?;
    Ok(Json(json!({
        "message": format!("Details of the student with registration number {}", reg_no),
        "data": student
    })))
}

#[utoipa::path(put, path = "/students/{regNo}", tag = "students",
    params(("regNo" = String, Path, description = "registration number")),
    request_body = crate::openapi::UpdateStudentDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation or conflict"), (status = 404, description = "Missing")))]
pub async fn update_student(
    State(state): State<ServerState>,
    Path(reg_no): Path<String>,
    Json(input): Json<UpdateStudent>,
) -> Result<Json<Value>, ApiError> {
    let updated = student_service::update_student(&state.db, &reg_no, input)
        .await
        .map_err(|e| failure(MUTATE_ERROR, e))?;
    Ok(Json(json!({
        "message": format!("Student updated successfully for registration number {}", reg_no),
        "data": updated
    })))
}

#[utoipa::path(delete, path = "/students/{regNo}", tag = "students",
    params(("regNo" = String, Path, description = "registration number")),
    responses((status = 200, description = "Soft-deleted"), (status = 404, description = "Missing or already inactive")))]
pub async fn delete_student(
    State(state): State<ServerState>,
    Path(reg_no): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = student_service::soft_delete_student(&state.db, &reg_no)
        .await
        .map_err(|e| failure(MUTATE_ERROR, e))?;
    Ok(Json(json!({
        "message": format!("Student deleted successfully for registration number {}", reg_no),
        "data": deleted
    })))
}
