//! # Payment Handlers
//!
//! Handlers for student payment records. The billing period end is derived
//! here on every write: `end_date` never arrives from the client, and any
//! change to `start_date` or `payment_type` re-derives it from the
//! effective pair via [`classboard_core::billing::add_duration`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use classboard_core::{
    billing,
    errors::BoardError,
    models::payment::{
        CreatePaymentRequest, PaymentPlan, PaymentResponse, UpdatePaymentRequest,
    },
};
use classboard_db::models::DbPayment;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

// A stored row with an unparseable plan code is corruption, not caller error.
fn to_response(row: DbPayment) -> Result<PaymentResponse, AppError> {
    let plan = PaymentPlan::from_code(&row.payment_type).map_err(|_| {
        AppError(BoardError::Internal(
            format!(
                "stored payment {} has unknown plan code {}",
                row.id, row.payment_type
            )
            .into(),
        ))
    })?;

    Ok(PaymentResponse {
        id: row.id,
        student_id: row.student_id,
        title: row.title,
        amount: row.amount,
        currency: row.currency,
        payment_type: plan,
        start_date: row.start_date,
        end_date: row.end_date,
    })
}

/// Creates a payment record for a student.
///
/// The plan code is parsed from its wire string (unknown codes are a 400
/// `InvalidPlanCode`), the start date defaults to now when absent, and the
/// period end is derived before anything is persisted.
#[axum::debug_handler]
pub async fn create_payment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    // Derive the billing period before touching the database
    let plan = PaymentPlan::from_code(&payload.payment_type)?;
    let start_date = match &payload.start_date {
        Some(raw) => billing::parse_start_date(raw)?,
        None => Utc::now(),
    };
    let end_date = billing::add_duration(start_date, plan)?;

    // Verify the student exists
    classboard_db::repositories::student::get_student_by_id(&state.db_pool, payload.student_id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| {
            BoardError::NotFound(format!("Student with ID {} not found", payload.student_id))
        })?;

    // Create payment in database
    let db_payment = classboard_db::repositories::payment::create_payment(
        &state.db_pool,
        payload.student_id,
        &payload.title,
        payload.amount,
        &payload.currency,
        plan.as_code(),
        start_date,
        end_date,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_payment)?))
}

#[axum::debug_handler]
pub async fn get_payment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentResponse>, AppError> {
    let db_payment = classboard_db::repositories::payment::get_payment_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Payment with ID {} not found", id)))?;

    Ok(Json(to_response(db_payment)?))
}

#[axum::debug_handler]
pub async fn get_student_payments(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<PaymentResponse>>, AppError> {
    // Verify the student exists
    classboard_db::repositories::student::get_student_by_id(&state.db_pool, student_id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Student with ID {} not found", student_id)))?;

    let db_payments = classboard_db::repositories::payment::get_payments_by_student_id(
        &state.db_pool,
        student_id,
    )
    .await
    .map_err(BoardError::Database)?;

    let payments = db_payments
        .into_iter()
        .map(to_response)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(payments))
}

/// Updates a payment record.
///
/// Fields absent from the request keep their stored values. The period end
/// is re-derived from the effective `(start_date, payment_type)` pair, so a
/// stale stored `end_date` can never survive an edit to either input.
#[axum::debug_handler]
pub async fn update_payment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let existing = classboard_db::repositories::payment::get_payment_by_id(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?
        .ok_or_else(|| BoardError::NotFound(format!("Payment with ID {} not found", id)))?;

    // Effective plan and start: supplied value, else stored value
    let plan = match &payload.payment_type {
        Some(code) => PaymentPlan::from_code(code)?,
        None => PaymentPlan::from_code(&existing.payment_type).map_err(|_| {
            AppError(BoardError::Internal(
                format!(
                    "stored payment {} has unknown plan code {}",
                    existing.id, existing.payment_type
                )
                .into(),
            ))
        })?,
    };
    let start_date = match &payload.start_date {
        Some(raw) => billing::parse_start_date(raw)?,
        None => existing.start_date,
    };
    let end_date = billing::add_duration(start_date, plan)?;

    let title = payload.title.as_deref().unwrap_or(&existing.title);
    let amount = payload.amount.unwrap_or(existing.amount);
    let currency = payload.currency.as_deref().unwrap_or(&existing.currency);

    let db_payment = classboard_db::repositories::payment::update_payment(
        &state.db_pool,
        id,
        title,
        amount,
        currency,
        plan.as_code(),
        start_date,
        end_date,
    )
    .await
    .map_err(BoardError::Database)?;

    Ok(Json(to_response(db_payment)?))
}

#[axum::debug_handler]
pub async fn delete_payment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = classboard_db::repositories::payment::delete_payment(&state.db_pool, id)
        .await
        .map_err(BoardError::Database)?;

    if !deleted {
        return Err(AppError(BoardError::NotFound(format!(
            "Payment with ID {} not found",
            id
        ))));
    }

    Ok(StatusCode::NO_CONTENT)
}
