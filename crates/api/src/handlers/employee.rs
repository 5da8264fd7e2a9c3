use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use classboard_core::{
    errors::BoardError,
    models::employee::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest},
};
use classboard_db::models::DbEmployee;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_response(row: DbEmployee) -> EmployeeResponse {
    EmployeeResponse {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        role: row.role,
        created_at: row.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let db_employee = classboard_db::repositories::employee::create_employee(
        &state.db_pool,
        &payload.first_name,
        &payload.last_name,
        &payload.email,
        &payload.role,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_employee)))
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let db_employee = classboard_db::repositories::employee::get_employee_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Employee with ID {} not found", id)))?;

    Ok(Json(to_response(db_employee)))
}

#[axum::debug_handler]
pub async fn list_employees(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let db_employees = classboard_db::repositories::employee::list_employees(&state.db_pool)
        .await
        .map_err(BoardError::Database)?;

    Ok(Json(db_employees.into_iter().map(to_response).collect()))
}

#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let existing = classboard_db::repositories::employee::get_employee_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Employee with ID {} not found", id)))?;

    let first_name = payload.first_name.as_deref().unwrap_or(&existing.first_name);
    let last_name = payload.last_name.as_deref().unwrap_or(&existing.last_name);
    let email = payload.email.as_deref().unwrap_or(&existing.email);
    let role = payload.role.as_deref().unwrap_or(&existing.role);

    let db_employee = classboard_db::repositories::employee::update_employee(
        &state.db_pool,
        id,
        first_name,
        last_name,
        email,
        role,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_employee)))
}

#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = classboard_db::repositories::employee::delete_employee(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?;

    if !deleted {
        return Err(AppError(BoardError::NotFound(format!(
            "Employee with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
