//! # Classroom Handlers
//!
//! Handlers for classrooms and their weekly schedule sets. Every schedule
//! mutation is validated through [`classboard_core::scheduling`] against
//! the set read in the same request, so a conflicting block is rejected
//! with a 409 before anything is written.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use classboard_core::{
    errors::BoardError,
    models::{
        classroom::{ClassroomResponse, CreateClassroomRequest, GetClassroomResponse},
        schedule::{
            CreateScheduleEntryRequest, ReplaceSchedulesRequest, ScheduleEntry,
            ScheduleEntryResponse, Weekday,
        },
    },
    scheduling,
};
use classboard_db::models::DbScheduleEntry;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

// A stored row with an unparseable day code is corruption, not caller error.
fn to_core_entry(row: DbScheduleEntry) -> Result<ScheduleEntry, AppError> {
    let day = Weekday::from_code(&row.day).ok_or_else(|| {
        AppError(BoardError::Internal(
            format!("stored schedule {} has unknown day {}", row.id, row.day).into(),
        ))
    })?;

    Ok(ScheduleEntry {
        id: row.id,
        classroom_id: row.classroom_id,
        day,
        start_time: row.start_time,
        end_time: row.end_time,
        created_at: row.created_at,
    })
}

fn to_entry_response(entry: ScheduleEntry) -> ScheduleEntryResponse {
    ScheduleEntryResponse {
        id: entry.id,
        day: entry.day,
        start_time: entry.start_time,
        end_time: entry.end_time,
    }
}

async fn load_entries(
    state: &ApiState,
    classroom_id: Uuid,
) -> Result<Vec<ScheduleEntry>, AppError> {
    let rows = classboard_db::repositories::schedule::get_schedule_entries_by_classroom_id(
        &state.db_pool,
        classroom_id,
    )
    .await
    .map_err(BoardError::Database)?;

    rows.into_iter().map(to_core_entry).collect()
}

async fn ensure_classroom_exists(state: &ApiState, id: Uuid) -> Result<(), AppError> {
    classboard_db::repositories::classroom::get_classroom_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Classroom with ID {} not found", id)))?;

    Ok(())
}

#[axum::debug_handler]
pub async fn create_classroom(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClassroomRequest>,
) -> Result<Json<ClassroomResponse>, AppError> {
    let db_classroom = classboard_db::repositories::classroom::create_classroom(
        &state.db_pool,
        &payload.name,
        payload.capacity,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(ClassroomResponse {
        id: db_classroom.id,
        name: db_classroom.name,
        capacity: db_classroom.capacity,
        created_at: db_classroom.created_at,
    }))
}

#[axum::debug_handler]
pub async fn list_classrooms(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClassroomResponse>>, AppError> {
    let db_classrooms = classboard_db::repositories::classroom::list_classrooms(&state.db_pool)
        .await
        .map_err(BoardError::Database)?;

    let classrooms = db_classrooms
        .into_iter()
        .map(|c| ClassroomResponse {
            id: c.id,
            name: c.name,
            capacity: c.capacity,
            created_at: c.created_at,
        })
        .collect();

    Ok(Json(classrooms))
}

#[axum::debug_handler]
pub async fn get_classroom(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetClassroomResponse>, AppError> {
    let db_classroom =
        classboard_db::repositories::classroom::get_classroom_by_id(&state.db_pool, id)
            .await
            .map_err(BoardError::Database)?
            .ok_or_else(|| BoardError::NotFound(format!("Classroom with ID {} not found", id)))?;

    // Display order is day-then-start; evaluation never depends on it
    let mut entries = load_entries(&state, id).await?;
    entries.sort_by_key(|e| (e.day, e.start_time));

    Ok(Json(GetClassroomResponse {
        id: db_classroom.id,
        name: db_classroom.name,
        capacity: db_classroom.capacity,
        created_at: db_classroom.created_at,
        schedules: entries.into_iter().map(to_entry_response).collect(),
    }))
}

#[axum::debug_handler]
pub async fn delete_classroom(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_classroom_exists(&state, id).await?;

    // Schedule rows reference the classroom, so they go first
    classboard_db::repositories::schedule::delete_schedule_entries_by_classroom_id(
        &state.db_pool,
        id,
    )
    .await
    .map_err(BoardError::Database)?;

    classboard_db::repositories::classroom::delete_classroom(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Adds a single schedule block to a classroom.
///
/// The candidate is checked against the classroom's current set as read in
/// this request. An inverted range is a 400; an overlap with a same-day
/// block is a 409 naming the conflicting entry.
#[axum::debug_handler]
pub async fn add_schedule_entry(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateScheduleEntryRequest>,
) -> Result<Json<ScheduleEntryResponse>, AppError> {
    ensure_classroom_exists(&state, id).await?;

    // Validate the candidate against the current set before inserting
    let existing = load_entries(&state, id).await?;
    scheduling::check_candidate(&existing, payload.day, payload.start_time, payload.end_time)?;

    let row = classboard_db::repositories::schedule::create_schedule_entry(
        &state.db_pool,
        id,
        payload.day.as_code(),
        payload.start_time,
        payload.end_time,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_entry_response(to_core_entry(row)?)))
}

/// Replaces a classroom's whole schedule set, as submitted by the editing
/// form. The proposed set is validated pairwise first; only then are the
/// old rows dropped and the new ones written.
#[axum::debug_handler]
pub async fn replace_schedules(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplaceSchedulesRequest>,
) -> Result<Json<Vec<ScheduleEntryResponse>>, AppError> {
    ensure_classroom_exists(&state, id).await?;

    scheduling::validate_entries(&payload.entries)?;

    // Replace: delete existing entries, then create the new set
    classboard_db::repositories::schedule::delete_schedule_entries_by_classroom_id(
        &state.db_pool,
        id,
    )
    .await
    .map_err(BoardError::Database)?;

    let mut created = Vec::with_capacity(payload.entries.len());
    for entry in &payload.entries {
        let row = classboard_db::repositories::schedule::create_schedule_entry(
            &state.db_pool,
            id,
            entry.day.as_code(),
            entry.start_time,
            entry.end_time,
        )
        .await
        .map_err(BoardError::Database)?;

        created.push(to_core_entry(row)?);
    }

    created.sort_by_key(|e| (e.day, e.start_time));

    Ok(Json(created.into_iter().map(to_entry_response).collect()))
}

#[axum::debug_handler]
pub async fn delete_schedule_entry(
    State(state): State<Arc<ApiState>>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let deleted = classboard_db::repositories::schedule::delete_schedule_entry(
        &state.db_pool,
        id,
        entry_id,
    )
    .await
    .map_err(BoardError::Database)?;

    if !deleted {
        return Err(AppError(BoardError::NotFound(format!(
            "Schedule entry with ID {} not found in classroom {}",
            entry_id, id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
