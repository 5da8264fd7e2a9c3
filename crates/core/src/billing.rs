//! # Billing Periods
//!
//! Pure date arithmetic for student payment records. A payment covers a
//! whole number of calendar months determined by its [`PaymentPlan`], and
//! the period end is always derived here — callers never supply it.
//!
//! ## Month rollover policy
//!
//! Calendar-month addition clamps to the last valid day of the target
//! month (chrono's `checked_add_months` behaviour):
//!
//! - 2024-01-31 + MONTH_1 = 2024-02-29 (leap year)
//! - 2023-01-31 + MONTH_1 = 2023-02-28
//! - 2024-01-15 + MONTH_1 = 2024-02-15
//!
//! The clamp policy is pinned by tests and must not change silently, since
//! stored `end_date` values would stop agreeing with recomputed ones.

use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::errors::{BoardError, BoardResult};
use crate::models::payment::PaymentPlan;

/// Computes the end of the billing period starting at `start` under `plan`.
///
/// For every representable input the result is strictly after `start`,
/// since each plan covers at least one month.
///
/// # Errors
///
/// * `BoardError::InvalidDate` - the addition leaves chrono's representable
///   date range
pub fn add_duration(start: DateTime<Utc>, plan: PaymentPlan) -> BoardResult<DateTime<Utc>> {
    start
        .checked_add_months(Months::new(plan.months()))
        .ok_or_else(|| {
            BoardError::InvalidDate(format!(
                "{} + {} months is out of range",
                start,
                plan.months()
            ))
        })
}

/// Parses a period start supplied on the wire.
///
/// Accepts an RFC 3339 instant ("2024-01-15T09:00:00Z") or a bare date
/// ("2024-01-15", taken as midnight UTC). Anything else is rejected with
/// `InvalidDate` carrying the offending input.
pub fn parse_start_date(input: &str) -> BoardResult<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        // Midnight always exists, but and_hms_opt keeps the path fallible
        // rather than panicking on future format changes.
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| BoardError::InvalidDate(input.to_string()))?;
        return Ok(midnight.and_utc());
    }

    Err(BoardError::InvalidDate(input.to_string()))
}
