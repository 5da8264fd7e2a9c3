use crate::models::DbStudent;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_student(
    pool: &Pool<Postgres>,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    program_id: Option<Uuid>,
    classroom_id: Option<Uuid>,
) -> Result<DbStudent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO students (id, first_name, last_name, email, program_id, classroom_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, first_name, last_name, email, program_id, classroom_id, created_at
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(program_id)
    .bind(classroom_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(student)
}

pub async fn get_student_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, first_name, last_name, email, program_id, classroom_id, created_at
        FROM students
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

pub async fn list_students(pool: &Pool<Postgres>) -> Result<Vec<DbStudent>> {
    let students = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, first_name, last_name, email, program_id, classroom_id, created_at
        FROM students
        ORDER BY last_name ASC, first_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(students)
}

pub async fn update_student(
    pool: &Pool<Postgres>,
    id: Uuid,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    program_id: Option<Uuid>,
    classroom_id: Option<Uuid>,
) -> Result<DbStudent> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        UPDATE students
        SET first_name = $2, last_name = $3, email = $4, program_id = $5, classroom_id = $6
        WHERE id = $1
        RETURNING id, first_name, last_name, email, program_id, classroom_id, created_at
        "#,
    )
    .bind(id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(program_id)
    .bind(classroom_id)
    .fetch_one(pool)
    .await?;

    Ok(student)
}

pub async fn delete_student(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM students
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
