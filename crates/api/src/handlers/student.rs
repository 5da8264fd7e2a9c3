use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use classboard_core::{
    errors::BoardError,
    models::student::{CreateStudentRequest, StudentResponse, UpdateStudentRequest},
};
use classboard_db::models::DbStudent;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_response(row: DbStudent) -> StudentResponse {
    StudentResponse {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        program_id: row.program_id,
        classroom_id: row.classroom_id,
        created_at: row.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_student(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let db_student = classboard_db::repositories::student::create_student(
        &state.db_pool,
        &payload.first_name,
        &payload.last_name,
        payload.email.as_deref(),
        payload.program_id,
        payload.classroom_id,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_student)))
}

#[axum::debug_handler]
pub async fn get_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentResponse>, AppError> {
    let db_student = classboard_db::repositories::student::get_student_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Student with ID {} not found", id)))?;

    Ok(Json(to_response(db_student)))
}

#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let db_students = classboard_db::repositories::student::list_students(&state.db_pool)
        .await
        .map_err(BoardError::Database)?;

    Ok(Json(db_students.into_iter().map(to_response).collect()))
}

#[axum::debug_handler]
pub async fn update_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let existing = classboard_db::repositories::student::get_student_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Student with ID {} not found", id)))?;

    let first_name = payload.first_name.as_deref().unwrap_or(&existing.first_name);
    let last_name = payload.last_name.as_deref().unwrap_or(&existing.last_name);
    let email = payload.email.as_deref().or(existing.email.as_deref());
    let program_id = payload.program_id.or(existing.program_id);
    let classroom_id = payload.classroom_id.or(existing.classroom_id);

    let db_student = classboard_db::repositories::student::update_student(
        &state.db_pool,
        id,
        first_name,
        last_name,
        email,
        program_id,
        classroom_id,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_student)))
}

#[axum::debug_handler]
pub async fn delete_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = classboard_db::repositories::student::delete_student(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?;

    if !deleted {
        return Err(AppError(BoardError::NotFound(format!(
            "Student with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
