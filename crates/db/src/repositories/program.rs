use crate::models::DbProgram;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_program(
    pool: &Pool<Postgres>,
    name: &str,
    description: Option<&str>,
) -> Result<DbProgram> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let program = sqlx::query_as::<_, DbProgram>(
        r#"
        INSERT INTO programs (id, name, description, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(program)
}

pub async fn get_program_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbProgram>> {
    let program = sqlx::query_as::<_, DbProgram>(
        r#"
        SELECT id, name, description, created_at
        FROM programs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(program)
}

pub async fn list_programs(pool: &Pool<Postgres>) -> Result<Vec<DbProgram>> {
    let programs = sqlx::query_as::<_, DbProgram>(
        r#"
        SELECT id, name, description, created_at
        FROM programs
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(programs)
}

pub async fn update_program(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
    description: Option<&str>,
) -> Result<DbProgram> {
    let program = sqlx::query_as::<_, DbProgram>(
        r#"
        UPDATE programs
        SET name = $2, description = $3
        WHERE id = $1
        RETURNING id, name, description, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(program)
}

pub async fn delete_program(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM programs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
