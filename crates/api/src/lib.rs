//! # OpenSlot API
//!
//! The API crate provides the web server for the OpenSlot appointment-availability
//! service: a JSON endpoint that lists open hourly slots and the booking page
//! that calls it.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into calls on `openslot-core`
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment-driven server settings

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::{Result, WrapErr};
use openslot_core::{
    calendar::{BusyIntervalProvider, FixedDailyBlock},
    slots::WorkingHours,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// The busy-interval provider is injected here so a real calendar lookup can
/// replace the stub without touching slot generation.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use openslot_api::ApiState;
/// use openslot_core::FixedDailyBlock;
///
/// let state = Arc::new(ApiState::new(Arc::new(FixedDailyBlock::default())));
/// let app = openslot_api::router(state);
/// ```
pub struct ApiState {
    /// Source of busy intervals consulted for every request
    pub busy_provider: Arc<dyn BusyIntervalProvider>,
    /// Hours at which slots may start
    pub working_hours: WorkingHours,
}

impl ApiState {
    pub fn new(busy_provider: Arc<dyn BusyIntervalProvider>) -> Self {
        Self {
            busy_provider,
            working_hours: WorkingHours::default(),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(Arc::new(FixedDailyBlock::default()))
    }
}

/// Builds the application router with every route and per-request tracing
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Booking page
        .merge(routes::ui::routes())
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot generation endpoints
        .merge(routes::slots::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Installs the global tracing subscriber at the given level
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("Failed to install tracing subscriber")?;
    Ok(())
}

/// Starts the API server with the provided configuration and state
///
/// Initializes logging, applies CORS and timeout layers, then serves until
/// Ctrl-C is received.
///
/// # Errors
///
/// Fails if a CORS origin is not a valid header value, the address cannot be
/// bound, or the server stops with an I/O error.
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    init_tracing(config.log_level)?;

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid API_CORS_ORIGINS entry")?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
