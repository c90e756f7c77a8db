use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use storefront_core::{
    errors::StoreError,
    models::{
        holiday::Holiday,
        requests::{CreateHolidayRequest, DeleteResponse, UpdateHolidayRequest},
    },
};
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn not_found(id: Uuid) -> AppError {
    AppError(StoreError::NotFound(format!("Holiday with ID {} not found", id)))
}

#[axum::debug_handler]
pub async fn list_holidays(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Holiday>>, AppError> {
    let holidays = state.store.list_holidays().await?;
    Ok(Json(holidays))
}

#[axum::debug_handler]
pub async fn create_holiday(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateHolidayRequest>,
) -> Result<Json<Holiday>, AppError> {
    let new_holiday = payload.into_new_holiday()?;
    let holiday = state.store.create_holiday(new_holiday).await?;

    info!(id = %holiday.id, date = %holiday.date, title = %holiday.title, "holiday created");
    Ok(Json(holiday))
}

#[axum::debug_handler]
pub async fn update_holiday(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHolidayRequest>,
) -> Result<Json<Holiday>, AppError> {
    let update = payload.into_update()?;
    let holiday = state
        .store
        .update_holiday(id, update)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!(id = %holiday.id, "holiday updated");
    Ok(Json(holiday))
}

#[axum::debug_handler]
pub async fn delete_holiday(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !state.store.delete_holiday(id).await? {
        return Err(not_found(id));
    }

    info!(id = %id, "holiday deleted");
    Ok(Json(DeleteResponse { success: true }))
}
