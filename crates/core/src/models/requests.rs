//! Request and response bodies for the schedule endpoints, plus their
//! validation into domain values.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    holiday::{Holiday, HolidayUpdate, NewHoliday},
    hours::WeeklyHours,
    time_of_day::TimeOfDay,
};
use crate::errors::{StoreError, StoreResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertStoreHoursRequest {
    pub day_of_week: Option<i64>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub is_closed: Option<bool>,
}

impl UpsertStoreHoursRequest {
    pub fn into_weekly_hours(self) -> StoreResult<WeeklyHours> {
        let day_of_week = self
            .day_of_week
            .filter(|day| (0..=6).contains(day))
            .ok_or_else(|| StoreError::Validation("Invalid dayOfWeek (0-6)".to_string()))?
            as u8;
        let is_closed = self.is_closed.unwrap_or(false);

        if is_closed {
            return Ok(WeeklyHours::closed(day_of_week));
        }

        Ok(WeeklyHours {
            day_of_week,
            open_time: parse_time("openTime", self.open_time.as_deref())?,
            close_time: parse_time("closeTime", self.close_time.as_deref())?,
            is_closed,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHolidayRequest {
    pub date: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_closed: Option<bool>,
    pub override_open_time: Option<String>,
    pub override_close_time: Option<String>,
}

impl CreateHolidayRequest {
    pub fn into_new_holiday(self) -> StoreResult<NewHoliday> {
        let title = self.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        let date = self.date.filter(|d| !d.trim().is_empty());
        let (Some(date), Some(title)) = (date, title) else {
            return Err(StoreError::Validation(
                "Date and title are required".to_string(),
            ));
        };

        Ok(NewHoliday {
            date: parse_date(&date)?,
            title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            // a holiday is a closure unless stated otherwise
            is_closed: self.is_closed.unwrap_or(true),
            override_open_time: parse_time("overrideOpenTime", self.override_open_time.as_deref())?,
            override_close_time: parse_time(
                "overrideCloseTime",
                self.override_close_time.as_deref(),
            )?,
        })
    }
}

/// Partial holiday update. Absent fields are left alone; an explicit `null`
/// clears a nullable field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHolidayRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub override_open_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub override_close_time: Option<Option<String>>,
}

impl UpdateHolidayRequest {
    pub fn into_update(self) -> StoreResult<HolidayUpdate> {
        let title = match self.title {
            Some(title) if title.trim().is_empty() => {
                return Err(StoreError::Validation("Title cannot be empty".to_string()));
            }
            other => other,
        };

        Ok(HolidayUpdate {
            date: self.date.as_deref().map(parse_date).transpose()?,
            title,
            description: self.description,
            is_closed: self.is_closed,
            override_open_time: self
                .override_open_time
                .map(|raw| parse_time("overrideOpenTime", raw.as_deref()))
                .transpose()?,
            override_close_time: self
                .override_close_time
                .map(|raw| parse_time("overrideCloseTime", raw.as_deref()))
                .transpose()?,
        })
    }
}

/// Public schedule: the weekly table and the holidays still ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHoursResponse {
    pub hours: Vec<WeeklyHours>,
    pub holidays: Vec<Holiday>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn parse_time(field: &str, raw: Option<&str>) -> StoreResult<Option<TimeOfDay>> {
    TimeOfDay::parse_optional(raw)
        .map_err(|e| StoreError::Validation(format!("Invalid {}: {}", field, e)))
}

/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, whose
/// calendar date is kept as written.
fn parse_date(raw: &str) -> StoreResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| StoreError::Validation(format!("Invalid date: {:?}", raw)))
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
