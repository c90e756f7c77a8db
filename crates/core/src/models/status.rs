use serde::{Deserialize, Serialize};

use super::holiday::Holiday;
use super::hours::OpeningWindow;
use super::time_of_day::TimeOfDay;

pub const OPEN_NOW: &str = "Open now";
pub const CLOSED: &str = "Closed";
pub const CLOSED_TODAY: &str = "Closed today";
pub const HOURS_NOT_SET: &str = "Hours not set";

/// Outcome of resolving the schedule at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub is_open: bool,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<TimeOfDay>,
}

impl StoreStatus {
    pub fn closed_today() -> Self {
        Self::closed_with(CLOSED_TODAY)
    }

    pub fn hours_not_set() -> Self {
        Self::closed_with(HOURS_NOT_SET)
    }

    pub fn holiday_closed(holiday: &Holiday) -> Self {
        Self {
            is_open: false,
            reason: holiday.title.clone(),
            message: Some(holiday.closed_message()),
            open_time: None,
            close_time: None,
        }
    }

    pub fn holiday_hours(holiday: &Holiday, window: OpeningWindow, is_open: bool) -> Self {
        Self {
            is_open,
            reason: holiday.title.clone(),
            message: Some(format!("Special hours: {}", holiday.title)),
            open_time: Some(window.open),
            close_time: Some(window.close),
        }
    }

    pub fn regular(window: OpeningWindow, is_open: bool) -> Self {
        Self {
            is_open,
            reason: if is_open { OPEN_NOW } else { CLOSED }.to_string(),
            message: None,
            open_time: Some(window.open),
            close_time: Some(window.close),
        }
    }

    fn closed_with(reason: &str) -> Self {
        Self {
            is_open: false,
            reason: reason.to_string(),
            message: None,
            open_time: None,
            close_time: None,
        }
    }
}
