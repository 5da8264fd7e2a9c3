use chrono::NaiveTime;
use thiserror::Error;
use uuid::Uuid;

use crate::models::schedule::Weekday;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown payment plan code: {0}")]
    InvalidPlanCode(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time range: start {start} must be before end {end}")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("Schedule conflict: overlaps existing {day} block {start}-{end}")]
    ScheduleConflict {
        /// Id of the conflicting entry, when it is already persisted.
        id: Option<Uuid>,
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    },

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BoardResult<T> = Result<T, BoardError>;
