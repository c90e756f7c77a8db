use axum::{
    middleware::from_fn_with_state,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth::require_admin, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/admin/store-hours",
            get(handlers::store_hours::list_store_hours)
                .post(handlers::store_hours::upsert_store_hours),
        )
        .route(
            "/api/admin/holidays",
            get(handlers::holidays::list_holidays).post(handlers::holidays::create_holiday),
        )
        .route(
            "/api/admin/holidays/:id",
            put(handlers::holidays::update_holiday).delete(handlers::holidays::delete_holiday),
        )
        .route_layer(from_fn_with_state(state, require_admin))
}
