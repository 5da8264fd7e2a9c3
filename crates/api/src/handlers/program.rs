use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use classboard_core::{
    errors::BoardError,
    models::program::{CreateProgramRequest, ProgramResponse, UpdateProgramRequest},
};
use classboard_db::models::DbProgram;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn to_response(row: DbProgram) -> ProgramResponse {
    ProgramResponse {
        id: row.id,
        name: row.name,
        description: row.description,
        created_at: row.created_at,
    }
}

#[axum::debug_handler]
pub async fn create_program(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateProgramRequest>,
) -> Result<Json<ProgramResponse>, AppError> {
    let db_program = classboard_db::repositories::program::create_program(
        &state.db_pool,
        &payload.name,
        payload.description.as_deref(),
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_program)))
}

#[axum::debug_handler]
pub async fn get_program(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgramResponse>, AppError> {
    let db_program = classboard_db::repositories::program::get_program_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Program with ID {} not found", id)))?;

    Ok(Json(to_response(db_program)))
}

#[axum::debug_handler]
pub async fn list_programs(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ProgramResponse>>, AppError> {
    let db_programs = classboard_db::repositories::program::list_programs(&state.db_pool)
        .await
        .map_err(BoardError::Database)?;

    Ok(Json(db_programs.into_iter().map(to_response).collect()))
}

#[axum::debug_handler]
pub async fn update_program(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProgramRequest>,
) -> Result<Json<ProgramResponse>, AppError> {
    let existing = classboard_db::repositories::program::get_program_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Program with ID {} not found", id)))?;

    let name = payload.name.as_deref().unwrap_or(&existing.name);
    let description = payload.description.as_deref().or(existing.description.as_deref());

    let db_program = classboard_db::repositories::program::update_program(
        &state.db_pool,
        id,
        name,
        description,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_program)))
}

#[axum::debug_handler]
pub async fn delete_program(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = classboard_db::repositories::program::delete_program(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?;

    if !deleted {
        return Err(AppError(BoardError::NotFound(format!(
            "Program with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
