use chrono::NaiveTime;
use classboard_core::errors::{BoardError, BoardResult};
use classboard_core::models::schedule::Weekday;
use std::error::Error;
use uuid::Uuid;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_board_error_display() {
    let not_found = BoardError::NotFound("Student not found".to_string());
    let validation = BoardError::Validation("Invalid input".to_string());
    let plan_code = BoardError::InvalidPlanCode("WEEK_2".to_string());
    let date = BoardError::InvalidDate("not-a-date".to_string());
    let database = BoardError::Database(eyre::eyre!("Database connection failed"));
    let internal = BoardError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Student not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(plan_code.to_string(), "Unknown payment plan code: WEEK_2");
    assert_eq!(date.to_string(), "Invalid date: not-a-date");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_invalid_time_range_display_names_both_bounds() {
    let err = BoardError::InvalidTimeRange {
        start: time(10, 0),
        end: time(9, 0),
    };

    let message = err.to_string();
    assert!(message.contains("10:00"));
    assert!(message.contains("09:00"));
}

#[test]
fn test_schedule_conflict_display_names_the_block() {
    let err = BoardError::ScheduleConflict {
        id: Some(Uuid::new_v4()),
        day: Weekday::Monday,
        start: time(9, 0),
        end: time(10, 0),
    };

    let message = err.to_string();
    assert!(message.contains("MONDAY"));
    assert!(message.contains("09:00"));
    assert!(message.contains("10:00"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let board_error = BoardError::Internal(Box::new(io_error));

    assert!(board_error.source().is_some());
}

#[test]
fn test_board_result() {
    let result: BoardResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BoardResult<i32> = Err(BoardError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let board_error = BoardError::Database(eyre_error);

    assert!(board_error.to_string().contains("Database error"));
}
