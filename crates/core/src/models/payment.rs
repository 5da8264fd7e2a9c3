use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BoardError, BoardResult};

/// Subscription length code driving the billing-period end computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentPlan {
    #[serde(rename = "MONTH_1")]
    Month1,
    #[serde(rename = "MONTH_2")]
    Month2,
    #[serde(rename = "MONTH_3")]
    Month3,
    #[serde(rename = "MONTH_6")]
    Month6,
    #[serde(rename = "YEAR_1")]
    Year1,
}

impl PaymentPlan {
    /// Number of calendar months the plan covers.
    pub fn months(&self) -> u32 {
        match self {
            PaymentPlan::Month1 => 1,
            PaymentPlan::Month2 => 2,
            PaymentPlan::Month3 => 3,
            PaymentPlan::Month6 => 6,
            PaymentPlan::Year1 => 12,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            PaymentPlan::Month1 => "MONTH_1",
            PaymentPlan::Month2 => "MONTH_2",
            PaymentPlan::Month3 => "MONTH_3",
            PaymentPlan::Month6 => "MONTH_6",
            PaymentPlan::Year1 => "YEAR_1",
        }
    }

    /// Parses a plan code arriving as a plain string, e.g. from a request
    /// body or a stored payment row.
    pub fn from_code(code: &str) -> BoardResult<Self> {
        match code {
            "MONTH_1" => Ok(PaymentPlan::Month1),
            "MONTH_2" => Ok(PaymentPlan::Month2),
            "MONTH_3" => Ok(PaymentPlan::Month3),
            "MONTH_6" => Ok(PaymentPlan::Month6),
            "YEAR_1" => Ok(PaymentPlan::Year1),
            other => Err(BoardError::InvalidPlanCode(other.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// One billing period for a student. `end_date` is always derived from
/// `start_date` and `payment_type`, never supplied by a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    pub payment_type: PaymentPlan,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub student_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    /// Plan code, e.g. "MONTH_3". Travels as a string so an unknown code
    /// surfaces as `InvalidPlanCode` rather than a deserialization reject.
    pub payment_type: String,
    /// RFC 3339 instant or bare `YYYY-MM-DD`; defaults to now when absent.
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub payment_type: Option<String>,
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    pub payment_type: PaymentPlan,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
