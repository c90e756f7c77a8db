use crate::models::{DbStoreHours, time_column};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use storefront_core::models::hours::WeeklyHours;

pub async fn list_store_hours(pool: &Pool<Postgres>) -> Result<Vec<DbStoreHours>> {
    let hours = sqlx::query_as::<_, DbStoreHours>(
        r#"
        SELECT day_of_week, open_time, close_time, is_closed, updated_at
        FROM store_hours
        ORDER BY day_of_week ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(hours)
}

/// Inserts the row for `hours.day_of_week` or overwrites the existing one.
pub async fn upsert_store_hours(pool: &Pool<Postgres>, hours: &WeeklyHours) -> Result<DbStoreHours> {
    let hours = hours.clone().normalized();

    tracing::debug!(
        "Upserting store hours: day={}, open={:?}, close={:?}, closed={}",
        hours.day_of_week,
        hours.open_time,
        hours.close_time,
        hours.is_closed
    );

    let row = sqlx::query_as::<_, DbStoreHours>(
        r#"
        INSERT INTO store_hours (day_of_week, open_time, close_time, is_closed, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (day_of_week) DO UPDATE
        SET open_time = EXCLUDED.open_time,
            close_time = EXCLUDED.close_time,
            is_closed = EXCLUDED.is_closed,
            updated_at = EXCLUDED.updated_at
        RETURNING day_of_week, open_time, close_time, is_closed, updated_at
        "#,
    )
    .bind(i16::from(hours.day_of_week))
    .bind(time_column(hours.open_time))
    .bind(time_column(hours.close_time))
    .bind(hours.is_closed)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row)
}
