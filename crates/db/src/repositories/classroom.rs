use crate::models::DbClassroom;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_classroom(
    pool: &Pool<Postgres>,
    name: &str,
    capacity: i32,
) -> Result<DbClassroom> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        INSERT INTO classrooms (id, name, capacity, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, capacity, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(capacity)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(classroom)
}

pub async fn get_classroom_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbClassroom>> {
    let classroom = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, name, capacity, created_at
        FROM classrooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(classroom)
}

pub async fn list_classrooms(pool: &Pool<Postgres>) -> Result<Vec<DbClassroom>> {
    let classrooms = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, name, capacity, created_at
        FROM classrooms
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(classrooms)
}

pub async fn delete_classroom(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM classrooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
