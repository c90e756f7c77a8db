use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use storefront_api::handlers::content::PUBLIC_CACHE;
use storefront_core::models::{
    requests::StoreHoursResponse,
    status::{StoreStatus, CLOSED_TODAY},
};

use crate::test_utils::{date, every_day, holiday, time, TestContext};

#[tokio::test]
async fn test_store_status_open_on_regular_day() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_weekly_hours()
        .times(1)
        .returning(|| Ok(every_day("11:00", "22:00")));
    ctx.store
        .expect_holidays_between()
        .with(eq(date(2024, 6, 2)), eq(date(2024, 6, 3)))
        .times(1)
        .returning(|_, _| Ok(vec![]));

    let response = ctx.server().get("/api/content/store-status").await;

    response.assert_status_ok();
    assert_eq!(response.header("cache-control"), PUBLIC_CACHE);
    let status: StoreStatus = response.json();
    assert!(status.is_open);
    assert_eq!(status.reason, "Open now");
    assert_eq!(status.open_time, Some(time("11:00")));
    assert_eq!(status.close_time, Some(time("22:00")));
}

#[tokio::test]
async fn test_store_status_holiday_closure() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_weekly_hours()
        .returning(|| Ok(every_day("11:00", "22:00")));
    ctx.store
        .expect_holidays_between()
        .returning(|_, _| Ok(vec![holiday(date(2024, 6, 3), "Staff Training")]));

    let response = ctx.server().get("/api/content/store-status").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({
            "isOpen": false,
            "reason": "Staff Training",
            "message": "Closed: Staff Training",
        })
    );
}

#[tokio::test]
async fn test_store_status_uses_restaurant_time_zone() {
    // 01:30 UTC Tuesday is still 21:30 Monday in New York
    let mut ctx = TestContext::new()
        .at(Utc.with_ymd_and_hms(2024, 6, 4, 1, 30, 0).unwrap())
        .in_zone(chrono_tz::America::New_York);
    ctx.store
        .expect_list_weekly_hours()
        .returning(|| Ok(every_day("11:00", "22:00")));
    ctx.store
        .expect_holidays_between()
        .with(eq(date(2024, 6, 2)), eq(date(2024, 6, 3)))
        .returning(|_, _| Ok(vec![]));

    let response = ctx.server().get("/api/content/store-status").await;

    let status: StoreStatus = response.json();
    assert!(status.is_open);
}

#[tokio::test]
async fn test_store_status_without_schedule() {
    let mut ctx = TestContext::new();
    ctx.store.expect_list_weekly_hours().returning(|| Ok(vec![]));
    ctx.store
        .expect_holidays_between()
        .returning(|_, _| Ok(vec![]));

    let response = ctx.server().get("/api/content/store-status").await;

    response.assert_status_ok();
    let status: StoreStatus = response.json();
    assert!(!status.is_open);
    assert_eq!(status.reason, CLOSED_TODAY);
}

#[test_log::test(tokio::test)]
async fn test_store_status_store_failure_is_server_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_weekly_hours()
        .returning(|| Err(eyre::eyre!("connection refused")));
    ctx.store
        .expect_holidays_between()
        .returning(|_, _| Ok(vec![]));

    let response = ctx.server().get("/api/content/store-status").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_store_hours_lists_schedule_and_upcoming_holidays() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_weekly_hours()
        .returning(|| Ok(every_day("11:00", "22:00")));
    ctx.store
        .expect_upcoming_holidays()
        .with(eq(date(2024, 6, 3)))
        .returning(|_| Ok(vec![holiday(date(2024, 12, 25), "Christmas Day")]));

    let response = ctx.server().get("/api/content/store-hours").await;

    response.assert_status_ok();
    assert_eq!(response.header("cache-control"), PUBLIC_CACHE);
    let body: StoreHoursResponse = response.json();
    assert_eq!(body.hours.len(), 7);
    assert_eq!(body.holidays.len(), 1);
    assert_eq!(body.holidays[0].title, "Christmas Day");
}

#[test_log::test(tokio::test)]
async fn test_store_hours_degrades_to_empty_lists() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_weekly_hours()
        .returning(|| Err(eyre::eyre!("database unavailable")));
    ctx.store
        .expect_upcoming_holidays()
        .returning(|_| Ok(vec![]));

    let response = ctx.server().get("/api/content/store-hours").await;

    response.assert_status_ok();
    let body: StoreHoursResponse = response.json();
    assert_eq!(body, StoreHoursResponse::default());
}

#[tokio::test]
async fn test_health_reports_time_zone() {
    let ctx = TestContext::new().in_zone(chrono_tz::Europe::London);

    let response = ctx.server().get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["timezone"], "Europe/London");
}
