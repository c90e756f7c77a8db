use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use storefront_core::models::hours::WeeklyHours;

use crate::test_utils::{every_day, time, TestContext, ADMIN_TOKEN};

fn bearer() -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", ADMIN_TOKEN)).unwrap()
}

#[tokio::test]
async fn test_list_store_hours() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_weekly_hours()
        .times(1)
        .returning(|| Ok(every_day("09:00", "17:00")));

    let response = ctx
        .server()
        .get("/api/admin/store-hours")
        .add_header(AUTHORIZATION, bearer())
        .await;

    response.assert_status_ok();
    let hours: Vec<WeeklyHours> = response.json();
    assert_eq!(hours.len(), 7);
    assert_eq!(hours[0].open_time, Some(time("09:00")));
}

#[tokio::test]
async fn test_upsert_store_hours() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_upsert_weekly_hours()
        .withf(|hours| {
            hours.day_of_week == 5
                && hours.open_time == Some(time("18:00"))
                && hours.close_time == Some(time("02:00"))
                && !hours.is_closed
        })
        .times(1)
        .returning(Ok);

    let response = ctx
        .server()
        .post("/api/admin/store-hours")
        .add_header(AUTHORIZATION, bearer())
        .json(&json!({
            "dayOfWeek": 5,
            "openTime": "18:00",
            "closeTime": "02:00",
            "isClosed": false,
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({
            "dayOfWeek": 5,
            "openTime": "18:00",
            "closeTime": "02:00",
            "isClosed": false,
        })
    );
}

#[tokio::test]
async fn test_upsert_closed_day_clears_times() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_upsert_weekly_hours()
        .withf(|hours| hours.is_closed && hours.open_time.is_none() && hours.close_time.is_none())
        .times(1)
        .returning(Ok);

    let response = ctx
        .server()
        .post("/api/admin/store-hours")
        .add_header(AUTHORIZATION, bearer())
        .json(&json!({
            "dayOfWeek": 0,
            "openTime": "11:00",
            "closeTime": "22:00",
            "isClosed": true,
        }))
        .await;

    response.assert_status_ok();
    let saved: WeeklyHours = response.json();
    assert_eq!(saved, WeeklyHours::closed(0));
}

#[rstest]
#[case(json!({ "dayOfWeek": 9, "openTime": "11:00", "closeTime": "22:00" }), "Invalid dayOfWeek (0-6)")]
#[case(json!({ "openTime": "11:00" }), "Invalid dayOfWeek (0-6)")]
#[case(json!({ "dayOfWeek": 1, "openTime": "11am", "closeTime": "22:00" }), "Invalid openTime: expected HH:MM, got \"11am\"")]
#[tokio::test]
async fn test_upsert_rejects_invalid_body(#[case] body: serde_json::Value, #[case] error: &str) {
    let mut ctx = TestContext::new();
    ctx.store.expect_upsert_weekly_hours().times(0);

    let response = ctx
        .server()
        .post("/api/admin/store-hours")
        .add_header(AUTHORIZATION, bearer())
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], error);
}
