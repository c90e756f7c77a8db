use crate::models::{DbHoliday, time_column};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use storefront_core::models::holiday::{Holiday, NewHoliday};
use uuid::Uuid;

const HOLIDAY_COLUMNS: &str = "id, date, title, description, is_closed, \
    override_open_time, override_close_time, created_at";

pub async fn create_holiday(pool: &Pool<Postgres>, holiday: &NewHoliday) -> Result<DbHoliday> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating holiday: id={}, date={}, title={}, closed={}",
        id, holiday.date, holiday.title, holiday.is_closed
    );

    let row = sqlx::query_as::<_, DbHoliday>(&format!(
        r#"
        INSERT INTO holidays ({HOLIDAY_COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {HOLIDAY_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(holiday.date)
    .bind(&holiday.title)
    .bind(&holiday.description)
    .bind(holiday.is_closed)
    .bind(time_column(holiday.override_open_time))
    .bind(time_column(holiday.override_close_time))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_holiday_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbHoliday>> {
    let row = sqlx::query_as::<_, DbHoliday>(&format!(
        r#"
        SELECT {HOLIDAY_COLUMNS}
        FROM holidays
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Holidays dated within `from..=to`, oldest row first within a date.
pub async fn get_holidays_between(
    pool: &Pool<Postgres>,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DbHoliday>> {
    let rows = sqlx::query_as::<_, DbHoliday>(&format!(
        r#"
        SELECT {HOLIDAY_COLUMNS}
        FROM holidays
        WHERE date BETWEEN $1 AND $2
        ORDER BY date ASC, created_at ASC, id ASC
        "#
    ))
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_holidays_from(pool: &Pool<Postgres>, from: NaiveDate) -> Result<Vec<DbHoliday>> {
    let rows = sqlx::query_as::<_, DbHoliday>(&format!(
        r#"
        SELECT {HOLIDAY_COLUMNS}
        FROM holidays
        WHERE date >= $1
        ORDER BY date ASC, created_at ASC, id ASC
        "#
    ))
    .bind(from)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_holidays(pool: &Pool<Postgres>) -> Result<Vec<DbHoliday>> {
    let rows = sqlx::query_as::<_, DbHoliday>(&format!(
        r#"
        SELECT {HOLIDAY_COLUMNS}
        FROM holidays
        ORDER BY date ASC, created_at ASC, id ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Writes every mutable column of `holiday` back to its row.
pub async fn update_holiday(pool: &Pool<Postgres>, holiday: &Holiday) -> Result<Option<DbHoliday>> {
    let row = sqlx::query_as::<_, DbHoliday>(&format!(
        r#"
        UPDATE holidays
        SET date = $2,
            title = $3,
            description = $4,
            is_closed = $5,
            override_open_time = $6,
            override_close_time = $7
        WHERE id = $1
        RETURNING {HOLIDAY_COLUMNS}
        "#
    ))
    .bind(holiday.id)
    .bind(holiday.date)
    .bind(&holiday.title)
    .bind(&holiday.description)
    .bind(holiday.is_closed)
    .bind(time_column(holiday.override_open_time))
    .bind(time_column(holiday.override_close_time))
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_holiday(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM holidays
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
