use axum::{
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    response::IntoResponse,
};
use storefront_api::middleware::error_handling::AppError;
use storefront_core::errors::StoreError;

use crate::test_utils::{every_day, TestContext, ADMIN_TOKEN};

#[tokio::test]
async fn test_error_handling_status_codes() {
    let cases = [
        (StoreError::NotFound("Holiday not found".to_string()), StatusCode::NOT_FOUND),
        (StoreError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST),
        (StoreError::Authentication("Missing bearer token".to_string()), StatusCode::UNAUTHORIZED),
        (StoreError::Authorization("Admin API is disabled".to_string()), StatusCode::FORBIDDEN),
        (StoreError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR),
        (StoreError::Internal("Internal error".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let response = AppError(error).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_admin_route_requires_token() {
    let mut ctx = TestContext::new();
    ctx.store.expect_list_weekly_hours().times(0);

    let response = ctx.server().get("/api/admin/store-hours").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Authentication error: Missing bearer token");
}

#[tokio::test]
async fn test_admin_route_rejects_wrong_token() {
    let mut ctx = TestContext::new();
    ctx.store.expect_list_holidays().times(0);

    let response = ctx
        .server()
        .get("/api/admin/holidays")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer not-the-token"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_api_disabled_without_configured_token() {
    let ctx = TestContext::new().without_admin();

    let response = ctx
        .server()
        .get("/api/admin/store-hours")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", ADMIN_TOKEN)).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_accepts_hashed_token() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_list_holidays()
        .times(1)
        .returning(|| Ok(vec![]));

    let response = ctx
        .server()
        .get("/api/admin/holidays")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", ADMIN_TOKEN)).unwrap(),
        )
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_plaintext_token_in_config_is_server_error() {
    let mut ctx = TestContext::new().with_admin_hash(ADMIN_TOKEN);
    ctx.store.expect_list_weekly_hours().times(0);

    let response = ctx
        .server()
        .get("/api/admin/store-hours")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", ADMIN_TOKEN)).unwrap(),
        )
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_public_routes_skip_admin_guard() {
    let mut ctx = TestContext::new().without_admin();
    ctx.store
        .expect_list_weekly_hours()
        .returning(|| Ok(every_day("11:00", "22:00")));
    ctx.store
        .expect_holidays_between()
        .returning(|_, _| Ok(vec![]));

    let response = ctx.server().get("/api/content/store-status").await;

    response.assert_status_ok();
}
