//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! ClassBoard API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! Invalid input (unknown plan codes, unparseable dates, inverted time
//! ranges) maps to 400. A schedule conflict is not a system fault but an
//! expected user-correctable condition, so it maps to 409 and its message
//! names the conflicting block for the client to highlight.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classboard_core::errors::BoardError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `BoardError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BoardError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BoardError::NotFound(_) => StatusCode::NOT_FOUND,
            BoardError::Validation(_) => StatusCode::BAD_REQUEST,
            BoardError::InvalidPlanCode(_) => StatusCode::BAD_REQUEST,
            BoardError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            BoardError::InvalidTimeRange { .. } => StatusCode::BAD_REQUEST,
            BoardError::ScheduleConflict { .. } => StatusCode::CONFLICT,
            BoardError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BoardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from BoardError to AppError
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, BoardError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Repository functions return `eyre::Result`; this wraps their failures
/// in the `BoardError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BoardError::Database(err))
    }
}

/// Maps a BoardError to an HTTP response directly, for callers that are
/// not themselves returning `Result<_, AppError>`.
pub fn map_error(err: BoardError) -> Response {
    AppError(err).into_response()
}
