use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/content/store-status",
            get(handlers::content::store_status),
        )
        .route(
            "/api/content/store-hours",
            get(handlers::content::store_hours),
        )
}
