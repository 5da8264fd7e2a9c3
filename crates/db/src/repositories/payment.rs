use crate::models::DbPayment;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[allow(clippy::too_many_arguments)]
pub async fn create_payment(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    title: &str,
    amount: f64,
    currency: &str,
    payment_type: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<DbPayment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let payment = sqlx::query_as::<_, DbPayment>(
        r#"
        INSERT INTO payments (id, student_id, title, amount, currency, payment_type, start_date, end_date, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, student_id, title, amount, currency, payment_type, start_date, end_date, created_at
        "#,
    )
    .bind(id)
    .bind(student_id)
    .bind(title)
    .bind(amount)
    .bind(currency)
    .bind(payment_type)
    .bind(start_date)
    .bind(end_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(payment)
}

pub async fn get_payment_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbPayment>> {
    let payment = sqlx::query_as::<_, DbPayment>(
        r#"
        SELECT id, student_id, title, amount, currency, payment_type, start_date, end_date, created_at
        FROM payments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(payment)
}

pub async fn get_payments_by_student_id(
    pool: &Pool<Postgres>,
    student_id: Uuid,
) -> Result<Vec<DbPayment>> {
    let payments = sqlx::query_as::<_, DbPayment>(
        r#"
        SELECT id, student_id, title, amount, currency, payment_type, start_date, end_date, created_at
        FROM payments
        WHERE student_id = $1
        ORDER BY start_date DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(payments)
}

#[allow(clippy::too_many_arguments)]
pub async fn update_payment(
    pool: &Pool<Postgres>,
    id: Uuid,
    title: &str,
    amount: f64,
    currency: &str,
    payment_type: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<DbPayment> {
    let payment = sqlx::query_as::<_, DbPayment>(
        r#"
        UPDATE payments
        SET title = $2, amount = $3, currency = $4, payment_type = $5, start_date = $6, end_date = $7
        WHERE id = $1
        RETURNING id, student_id, title, amount, currency, payment_type, start_date, end_date, created_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(amount)
    .bind(currency)
    .bind(payment_type)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await?;

    Ok(payment)
}

pub async fn delete_payment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM payments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
