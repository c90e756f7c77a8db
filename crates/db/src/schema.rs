use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per weekday, 0 = Sunday
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS store_hours (
            day_of_week SMALLINT PRIMARY KEY,
            open_time VARCHAR(8) NULL,
            close_time VARCHAR(8) NULL,
            is_closed BOOLEAN NOT NULL DEFAULT FALSE,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day_of_week CHECK (day_of_week BETWEEN 0 AND 6)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS holidays (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            is_closed BOOLEAN NOT NULL DEFAULT TRUE,
            override_open_time VARCHAR(8) NULL,
            override_close_time VARCHAR(8) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_holidays_date ON holidays(date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
