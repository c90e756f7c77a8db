//! # Store Status Resolver
//!
//! Decides whether the restaurant is open at a given local instant.
//!
//! Decision order:
//!
//! 1. A holiday dated today that is a full closure wins outright.
//! 2. A holiday dated today with both override times replaces the day's
//!    regular hours.
//! 3. Otherwise the weekly row for today's weekday is used. A holiday with
//!    an incomplete override falls through to this step.
//! 4. If steps 2 or 3 say closed, the previous day's window is checked in
//!    case it runs past midnight into `now`. Only a full closure today
//!    cuts that window off.
//!
//! Every window is half-open: open at the opening minute, closed at the
//! closing minute.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::models::{
    holiday::Holiday,
    hours::{OpeningWindow, WeeklyHours},
    status::StoreStatus,
};

/// Resolves the open/closed status at local time `now`.
///
/// `holidays` need not be sorted or limited to today. When several
/// holidays share a date the earliest created one applies, then the lowest
/// id.
pub fn resolve(now: NaiveDateTime, weekly_hours: &[WeeklyHours], holidays: &[Holiday]) -> StoreStatus {
    let today = now.date();

    if let Some(holiday) = holiday_on(today, holidays) {
        if holiday.is_closed {
            return StoreStatus::holiday_closed(holiday);
        }
        if let Some(window) = holiday.override_window() {
            let status = StoreStatus::holiday_hours(holiday, window, window.contains(today, now));
            if status.is_open {
                return status;
            }
            return carried_over(today, now, weekly_hours, holidays).unwrap_or(status);
        }
    }

    let status = regular_status(today, now, weekly_hours);
    if status.is_open {
        return status;
    }

    carried_over(today, now, weekly_hours, holidays).unwrap_or(status)
}

fn regular_status(today: NaiveDate, now: NaiveDateTime, weekly_hours: &[WeeklyHours]) -> StoreStatus {
    let Some(hours) = hours_for(today, weekly_hours) else {
        return StoreStatus::closed_today();
    };
    if hours.is_closed {
        return StoreStatus::closed_today();
    }
    match hours.window() {
        Some(window) => StoreStatus::regular(window, window.contains(today, now)),
        None => StoreStatus::hours_not_set(),
    }
}

/// Open status from yesterday's window if it runs past midnight and `now`
/// is still inside it.
fn carried_over(
    today: NaiveDate,
    now: NaiveDateTime,
    weekly_hours: &[WeeklyHours],
    holidays: &[Holiday],
) -> Option<StoreStatus> {
    let yesterday = today.pred_opt()?;
    let window = effective_window(yesterday, weekly_hours, holidays)?;
    (window.crosses_midnight() && window.contains(yesterday, now))
        .then(|| StoreStatus::regular(window, true))
}

fn effective_window(
    date: NaiveDate,
    weekly_hours: &[WeeklyHours],
    holidays: &[Holiday],
) -> Option<OpeningWindow> {
    if let Some(holiday) = holiday_on(date, holidays) {
        if holiday.is_closed {
            return None;
        }
        if let Some(window) = holiday.override_window() {
            return Some(window);
        }
    }
    hours_for(date, weekly_hours)?.window()
}

fn hours_for(date: NaiveDate, weekly_hours: &[WeeklyHours]) -> Option<&WeeklyHours> {
    let day_of_week = day_index(date);
    weekly_hours.iter().find(|h| h.day_of_week == day_of_week)
}

fn holiday_on(date: NaiveDate, holidays: &[Holiday]) -> Option<&Holiday> {
    let mut matches = holidays.iter().filter(|h| h.date == date);
    let first = matches.next()?;
    let mut extra = 0usize;
    let chosen = matches.fold(first, |best, candidate| {
        extra += 1;
        if (candidate.created_at, candidate.id) < (best.created_at, best.id) {
            candidate
        } else {
            best
        }
    });
    if extra > 0 {
        warn!(
            %date,
            matches = extra + 1,
            chosen = %chosen.id,
            "multiple holidays share a date, using the earliest created"
        );
    }
    Some(chosen)
}

/// Day-of-week index with Sunday as 0.
pub fn day_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
