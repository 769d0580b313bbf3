mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod score_client;
mod service;
mod store;

use axum::{
    error_handling::HandleErrorLayer,
    response::IntoResponse,
    routing::{get, post},
    BoxError, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;
use crate::errors::AppError;
use crate::score_client::ScoreClient;
use crate::service::UserService;
use crate::store::UserStore;

/// Server-side request deadline; a request still in flight after this long is
/// cut off and reported as cancelled.
const REQUEST_DEADLINE_SECS: u64 = 30;

/// Maps middleware errors (currently only the request deadline) to `AppError`.
async fn handle_middleware_error(err: BoxError) -> impl IntoResponse {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Cancelled(format!(
            "request exceeded the {}s deadline",
            REQUEST_DEADLINE_SECS
        ))
    } else {
        AppError::Cancelled(format!("unhandled middleware error: {}", err))
    }
}

/// Main entry point for the application.
///
/// Initializes tracing, configuration, the database pool, the score client,
/// and the HTTP routes, then serves the API alongside a minimal liveness
/// listener on the health-check port.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_records_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize database connection pool
    let db = Database::new(&config.database_url).await?;
    tracing::info!("Database connection pool established");

    // Initialize the credit score client
    let score_client = ScoreClient::new(
        config.credit_score_url.clone(),
        Duration::from_secs(config.score_timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("failed to initialize score client: {}", e))?;
    tracing::info!("Score client initialized: {}", config.credit_score_url);

    // Build application state
    let store = UserStore::new(db.pool.clone());
    let service = UserService::new(store, score_client);
    let app_state = Arc::new(handlers::AppState { service });

    // Build the API router
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/users", post(handlers::create_user))
        .route("/api/v1/users/:id", get(handlers::get_user))
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                // Request size limit: 1MB max payload
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                // Request deadline; lapses surface as a cancelled request
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_DEADLINE_SECS))),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Liveness listener on its own port, so orchestrators can probe the
    // process without going through the API middleware stack.
    let health_addr = format!("0.0.0.0:{}", config.health_check_port);
    let health_app = Router::new().route("/live", get(handlers::live));
    let health_listener = tokio::net::TcpListener::bind(&health_addr).await?;
    tracing::info!("Health check listening on {}", health_addr);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(health_listener, health_app).await {
            tracing::error!("Health check server failed: {}", e);
        }
    });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
