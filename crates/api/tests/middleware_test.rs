use chrono::NaiveTime;
use classboard_api::middleware::error_handling::{map_error, AppError};
use classboard_core::errors::BoardError;
use classboard_core::models::schedule::Weekday;
use uuid::Uuid;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = BoardError::NotFound("Resource not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = BoardError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_invalid_plan_code() {
    let error = BoardError::InvalidPlanCode("WEEK_2".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_invalid_date() {
    let error = BoardError::InvalidDate("not-a-date".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_invalid_time_range() {
    let error = BoardError::InvalidTimeRange {
        start: time(10, 0),
        end: time(9, 0),
    };

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_schedule_conflict_is_409() {
    let error = BoardError::ScheduleConflict {
        id: Some(Uuid::new_v4()),
        day: Weekday::Monday,
        start: time(9, 0),
        end: time(10, 0),
    };

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = BoardError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = BoardError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_app_error_from_board_error() {
    let error: AppError = BoardError::NotFound("missing".to_string()).into();

    assert!(matches!(error.0, BoardError::NotFound(_)));
}

#[tokio::test]
async fn test_app_error_from_eyre_report() {
    let error: AppError = eyre::eyre!("boom").into();

    assert!(matches!(error.0, BoardError::Database(_)));
}
