use crate::errors::AppError;
use crate::models::{CreateUserRequest, CreateUserResponse, UserResponse};
use crate::service::UserService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// The service (and through it the connection pool and HTTP client) is
/// constructed once at startup and shared across all requests.
pub struct AppState {
    /// Orchestrator for the two user operations.
    pub service: UserService,
}

/// Health check endpoint.
///
/// Returns the service status, name, and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "user-records-api",
            "version": "0.1.0"
        })),
    )
}

/// Liveness endpoint served on the dedicated health-check port.
pub async fn live() -> StatusCode {
    StatusCode::OK
}

/// POST /api/v1/users
///
/// Creates a user record and returns its identifier.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, AppError> {
    tracing::info!("POST /api/v1/users");

    let resp = state.service.create_user(req).await?;
    Ok(Json(resp))
}

/// GET /api/v1/users/:id
///
/// Looks up a user by identifier and enriches the record with a credit score
/// fetched from the external scorer.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    tracing::info!("GET /api/v1/users/{}", id);

    let resp = state.service.get_user(&id).await?;
    Ok(Json(resp))
}
