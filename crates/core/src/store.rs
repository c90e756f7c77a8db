//! The persistence seam the resolver's callers read schedules through.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use crate::models::{
    holiday::{Holiday, HolidayUpdate, NewHoliday},
    hours::WeeklyHours,
};

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// All weekly rows, ordered by day of week.
    async fn list_weekly_hours(&self) -> Result<Vec<WeeklyHours>>;

    /// Inserts or replaces the row for `hours.day_of_week`.
    async fn upsert_weekly_hours(&self, hours: WeeklyHours) -> Result<WeeklyHours>;

    /// Holidays dated within `from..=to`.
    async fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Holiday>>;

    async fn list_holidays(&self) -> Result<Vec<Holiday>>;

    /// Holidays dated on or after `from`, soonest first.
    async fn upcoming_holidays(&self, from: NaiveDate) -> Result<Vec<Holiday>>;

    async fn create_holiday(&self, holiday: NewHoliday) -> Result<Holiday>;

    /// Returns `None` when no holiday has this id.
    async fn update_holiday(&self, id: Uuid, update: HolidayUpdate) -> Result<Option<Holiday>>;

    /// Returns whether a row was removed.
    async fn delete_holiday(&self, id: Uuid) -> Result<bool>;
}
