use crate::models::DbScheduleEntry;
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule_entry(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
    day: &str,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbScheduleEntry> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let entry = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        INSERT INTO classroom_schedules (id, classroom_id, day, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, classroom_id, day, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(classroom_id)
    .bind(day)
    .bind(start_time)
    .bind(end_time)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn get_schedule_entries_by_classroom_id(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
) -> Result<Vec<DbScheduleEntry>> {
    let entries = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        SELECT id, classroom_id, day, start_time, end_time, created_at
        FROM classroom_schedules
        WHERE classroom_id = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(classroom_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn delete_schedule_entry(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
    entry_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM classroom_schedules
        WHERE id = $1 AND classroom_id = $2
        "#,
    )
    .bind(entry_id)
    .bind(classroom_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_schedule_entries_by_classroom_id(
    pool: &Pool<Postgres>,
    classroom_id: Uuid,
) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM classroom_schedules
        WHERE classroom_id = $1
        "#,
    )
    .bind(classroom_id)
    .execute(pool)
    .await?;

    Ok(())
}
