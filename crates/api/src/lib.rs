//! # Storefront API
//!
//! The API crate provides the web server for the restaurant's opening-hours
//! service: the public store status and schedule, and the admin endpoints
//! staff use to edit weekly hours and holidays.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like the admin guard and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and reads schedules through the
//! `ScheduleStore` trait, backed by SQLx in production.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for the admin guard and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use chrono_tz::Tz;
use eyre::Result;
use storefront_core::{
    clock::{Clock, SystemClock},
    store::ScheduleStore,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where weekly hours and holidays are read from and written to
    pub store: Arc<dyn ScheduleStore>,
    /// Source of "now" for the status endpoint
    pub clock: Arc<dyn Clock>,
    /// The restaurant's local time zone
    pub timezone: Tz,
    /// Argon2 hash of the admin bearer token; `None` disables admin routes
    pub admin_token_hash: Option<String>,
}

impl ApiState {
    pub fn new(store: Arc<dyn ScheduleStore>, config: &config::ApiConfig) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            timezone: config.timezone,
            admin_token_hash: config.admin_token_hash.clone(),
        }
    }
}

/// Builds the application router with every route attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Public store status and schedule
        .merge(routes::content::routes())
        // Staff-only schedule management
        .merge(routes::admin::routes(state.clone()))
        .with_state(state)
}

/// Starts the API server with the provided configuration and schedule store
///
/// Installs the tracing subscriber, applies CORS, tracing and timeout layers,
/// and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn ScheduleStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if config.admin_token_hash.is_none() {
        warn!("ADMIN_API_TOKEN is not set, admin endpoints are disabled");
    }
    info!("Resolving store hours in time zone {}", config.timezone);

    let state = Arc::new(ApiState::new(store, &config));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
