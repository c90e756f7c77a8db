//! # Public Content Handlers
//!
//! Read-only endpoints backing the site's "open now" badge and hours table.
//! Responses may be cached by a CDN for a short window.

use axum::{
    extract::State,
    http::header::CACHE_CONTROL,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use storefront_core::{
    clock::local_now,
    models::requests::StoreHoursResponse,
    resolve,
};
use tracing::{debug, error};

use crate::{middleware::error_handling::AppError, ApiState};

/// `Cache-Control` value for public schedule responses
pub const PUBLIC_CACHE: &str = "public, s-maxage=30, stale-while-revalidate=60";

/// Resolves whether the restaurant is open right now.
///
/// Yesterday's holidays are loaded too so an overnight special window can
/// carry past midnight.
#[axum::debug_handler]
pub async fn store_status(
    State(state): State<Arc<ApiState>>,
) -> Result<impl IntoResponse, AppError> {
    let now = local_now(state.clock.as_ref(), &state.timezone);
    let today = now.date();
    let yesterday = today.pred_opt().unwrap_or(today);

    let (weekly_hours, holidays) = tokio::try_join!(
        state.store.list_weekly_hours(),
        state.store.holidays_between(yesterday, today),
    )?;

    let status = resolve(now, &weekly_hours, &holidays);
    debug!(%now, is_open = status.is_open, reason = %status.reason, "resolved store status");

    Ok(([(CACHE_CONTROL, PUBLIC_CACHE)], Json(status)))
}

/// Weekly hours plus upcoming holidays. Store failures degrade to empty
/// lists so the public page still renders.
#[axum::debug_handler]
pub async fn store_hours(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    let today = local_now(state.clock.as_ref(), &state.timezone).date();

    let body = match tokio::try_join!(
        state.store.list_weekly_hours(),
        state.store.upcoming_holidays(today),
    ) {
        Ok((hours, holidays)) => StoreHoursResponse { hours, holidays },
        Err(e) => {
            error!(error = ?e, "Error fetching store hours");
            StoreHoursResponse::default()
        }
    };

    ([(CACHE_CONTROL, PUBLIC_CACHE)], Json(body))
}
