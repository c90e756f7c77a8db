use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use storefront_core::{
    models::{
        holiday::{Holiday, HolidayUpdate, NewHoliday},
        hours::WeeklyHours,
    },
    store::ScheduleStore,
};
use uuid::Uuid;

use crate::{
    DbPool,
    models::DbHoliday,
    repositories::{holiday, store_hours},
};

/// [`ScheduleStore`] backed by the PostgreSQL tables from [`crate::schema`].
#[derive(Debug, Clone)]
pub struct PgScheduleStore {
    pool: DbPool,
}

impl PgScheduleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_holidays(rows: Vec<DbHoliday>) -> Vec<Holiday> {
    rows.into_iter().map(Holiday::from).collect()
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn list_weekly_hours(&self) -> Result<Vec<WeeklyHours>> {
        let rows = store_hours::list_store_hours(&self.pool).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| row.into_weekly_hours())
            .collect())
    }

    async fn upsert_weekly_hours(&self, hours: WeeklyHours) -> Result<WeeklyHours> {
        let row = store_hours::upsert_store_hours(&self.pool, &hours).await?;
        // the CHECK constraint keeps the weekday in range
        Ok(row.into_weekly_hours().unwrap_or(hours.normalized()))
    }

    async fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Holiday>> {
        let rows = holiday::get_holidays_between(&self.pool, from, to).await?;
        Ok(into_holidays(rows))
    }

    async fn list_holidays(&self) -> Result<Vec<Holiday>> {
        let rows = holiday::list_holidays(&self.pool).await?;
        Ok(into_holidays(rows))
    }

    async fn upcoming_holidays(&self, from: NaiveDate) -> Result<Vec<Holiday>> {
        let rows = holiday::get_holidays_from(&self.pool, from).await?;
        Ok(into_holidays(rows))
    }

    async fn create_holiday(&self, new: NewHoliday) -> Result<Holiday> {
        let row = holiday::create_holiday(&self.pool, &new).await?;
        Ok(row.into())
    }

    async fn update_holiday(&self, id: Uuid, update: HolidayUpdate) -> Result<Option<Holiday>> {
        let Some(row) = holiday::get_holiday_by_id(&self.pool, id).await? else {
            tracing::debug!("Holiday not found: id={}", id);
            return Ok(None);
        };

        let mut current = Holiday::from(row);
        current.apply(update);

        let updated = holiday::update_holiday(&self.pool, &current).await?;
        Ok(updated.map(Holiday::from))
    }

    async fn delete_holiday(&self, id: Uuid) -> Result<bool> {
        holiday::delete_holiday(&self.pool, id).await
    }
}
