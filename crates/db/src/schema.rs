use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create programs table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS programs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            description TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classrooms table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            capacity INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classroom_schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classroom_schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            classroom_id UUID NOT NULL REFERENCES classrooms(id),
            day VARCHAR(16) NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create students table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            program_id UUID NULL REFERENCES programs(id),
            classroom_id UUID NULL REFERENCES classrooms(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create employees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            role VARCHAR(64) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create payments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL REFERENCES students(id),
            title VARCHAR(255) NOT NULL,
            amount DOUBLE PRECISION NOT NULL,
            currency VARCHAR(8) NOT NULL,
            payment_type VARCHAR(16) NOT NULL,
            start_date TIMESTAMP WITH TIME ZONE NOT NULL,
            end_date TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_billing_period CHECK (end_date > start_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_classroom_schedules_classroom_id ON classroom_schedules(classroom_id)",
        "CREATE INDEX IF NOT EXISTS idx_classroom_schedules_day ON classroom_schedules(day)",
        "CREATE INDEX IF NOT EXISTS idx_students_program_id ON students(program_id)",
        "CREATE INDEX IF NOT EXISTS idx_students_classroom_id ON students(classroom_id)",
        "CREATE INDEX IF NOT EXISTS idx_payments_student_id ON payments(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_payments_start_date ON payments(start_date)",
        "CREATE INDEX IF NOT EXISTS idx_payments_end_date ON payments(end_date)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
