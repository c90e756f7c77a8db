use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::models::{holiday::Holiday, hours::WeeklyHours, time_of_day::TimeOfDay};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStoreHours {
    pub day_of_week: i16,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub is_closed: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbHoliday {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub is_closed: bool,
    pub override_open_time: Option<String>,
    pub override_close_time: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbStoreHours {
    /// Converts the row, or `None` if the weekday is out of range. Stored
    /// times that fail to parse are dropped, which the resolver reports as
    /// "Hours not set".
    pub fn into_weekly_hours(self) -> Option<WeeklyHours> {
        let day_of_week = match u8::try_from(self.day_of_week) {
            Ok(day) if day <= 6 => day,
            _ => {
                warn!(day_of_week = self.day_of_week, "skipping store_hours row with invalid weekday");
                return None;
            }
        };

        Some(WeeklyHours {
            day_of_week,
            open_time: stored_time("store_hours.open_time", self.open_time.as_deref()),
            close_time: stored_time("store_hours.close_time", self.close_time.as_deref()),
            is_closed: self.is_closed,
        })
    }
}

impl From<DbHoliday> for Holiday {
    fn from(row: DbHoliday) -> Self {
        Holiday {
            override_open_time: stored_time(
                "holidays.override_open_time",
                row.override_open_time.as_deref(),
            ),
            override_close_time: stored_time(
                "holidays.override_close_time",
                row.override_close_time.as_deref(),
            ),
            id: row.id,
            date: row.date,
            title: row.title,
            description: row.description,
            is_closed: row.is_closed,
            created_at: row.created_at,
        }
    }
}

fn stored_time(column: &'static str, raw: Option<&str>) -> Option<TimeOfDay> {
    TimeOfDay::parse_optional(raw).unwrap_or_else(|e| {
        warn!(column, error = %e, "ignoring malformed stored time");
        None
    })
}

/// Storage form of an optional time.
pub fn time_column(time: Option<TimeOfDay>) -> Option<String> {
    time.map(|t| t.to_string())
}
