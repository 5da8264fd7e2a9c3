use crate::models::DbEmployee;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_employee(
    pool: &Pool<Postgres>,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: &str,
) -> Result<DbEmployee> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        INSERT INTO employees (id, first_name, last_name, email, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, first_name, last_name, email, role, created_at
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn get_employee_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEmployee>> {
    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, first_name, last_name, email, role, created_at
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

pub async fn list_employees(pool: &Pool<Postgres>) -> Result<Vec<DbEmployee>> {
    let employees = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, first_name, last_name, email, role, created_at
        FROM employees
        ORDER BY last_name ASC, first_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn update_employee(
    pool: &Pool<Postgres>,
    id: Uuid,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: &str,
) -> Result<DbEmployee> {
    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        UPDATE employees
        SET first_name = $2, last_name = $3, email = $4, role = $5
        WHERE id = $1
        RETURNING id, first_name, last_name, email, role, created_at
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn delete_employee(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
