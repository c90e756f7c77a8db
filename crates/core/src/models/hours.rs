use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// Regular opening hours for one day of the week (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyHours {
    pub day_of_week: u8,
    pub open_time: Option<TimeOfDay>,
    pub close_time: Option<TimeOfDay>,
    #[serde(default)]
    pub is_closed: bool,
}

impl WeeklyHours {
    pub fn open(day_of_week: u8, open_time: TimeOfDay, close_time: TimeOfDay) -> Self {
        Self {
            day_of_week,
            open_time: Some(open_time),
            close_time: Some(close_time),
            is_closed: false,
        }
    }

    pub fn closed(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            open_time: None,
            close_time: None,
            is_closed: true,
        }
    }

    /// The opening window for this day, if it has one.
    pub fn window(&self) -> Option<OpeningWindow> {
        if self.is_closed {
            return None;
        }
        Some(OpeningWindow::new(self.open_time?, self.close_time?))
    }

    /// Normalizes the record for storage: a closed day carries no times.
    pub fn normalized(mut self) -> Self {
        if self.is_closed {
            self.open_time = None;
            self.close_time = None;
        }
        self
    }
}

/// An open/close pair of local times. A close time earlier than the open
/// time means the window runs past midnight into the next calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl OpeningWindow {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    pub fn crosses_midnight(&self) -> bool {
        self.close < self.open
    }

    /// Concrete `[open, close)` instants when the window starts on `date`.
    pub fn bounds(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let open = self.open.on(date);
        let mut close = self.close.on(date);
        if self.crosses_midnight() {
            close += Duration::days(1);
        }
        (open, close)
    }

    pub fn contains(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        let (open, close) = self.bounds(date);
        open <= now && now < close
    }
}
