use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hours::OpeningWindow;
use super::time_of_day::TimeOfDay;

/// A dated exception to the weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub is_closed: bool,
    pub override_open_time: Option<TimeOfDay>,
    pub override_close_time: Option<TimeOfDay>,
    pub created_at: DateTime<Utc>,
}

impl Holiday {
    /// Replacement hours, present only when the holiday is not a full
    /// closure and both override times are set.
    pub fn override_window(&self) -> Option<OpeningWindow> {
        if self.is_closed {
            return None;
        }
        Some(OpeningWindow::new(
            self.override_open_time?,
            self.override_close_time?,
        ))
    }

    pub fn closed_message(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Closed: {}", self.title))
    }

    pub fn apply(&mut self, update: HolidayUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(is_closed) = update.is_closed {
            self.is_closed = is_closed;
        }
        if let Some(open) = update.override_open_time {
            self.override_open_time = open;
        }
        if let Some(close) = update.override_close_time {
            self.override_close_time = close;
        }
    }
}

/// Fields for a new holiday row; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHoliday {
    pub date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub is_closed: bool,
    pub override_open_time: Option<TimeOfDay>,
    pub override_close_time: Option<TimeOfDay>,
}

/// Partial update. The outer `Option` says whether the field was sent, the
/// inner one (for nullable columns) carries an explicit clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayUpdate {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub is_closed: Option<bool>,
    pub override_open_time: Option<Option<TimeOfDay>>,
    pub override_close_time: Option<Option<TimeOfDay>>,
}
