use axum::{extract::State, Json};
use std::sync::Arc;
use storefront_core::models::{hours::WeeklyHours, requests::UpsertStoreHoursRequest};
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_store_hours(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<WeeklyHours>>, AppError> {
    let hours = state.store.list_weekly_hours().await?;
    Ok(Json(hours))
}

/// Creates or replaces the hours for one weekday.
#[axum::debug_handler]
pub async fn upsert_store_hours(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<UpsertStoreHoursRequest>,
) -> Result<Json<WeeklyHours>, AppError> {
    let hours = payload.into_weekly_hours()?;
    let saved = state.store.upsert_weekly_hours(hours).await?;

    info!(
        day_of_week = saved.day_of_week,
        is_closed = saved.is_closed,
        "store hours updated"
    );
    Ok(Json(saved))
}
