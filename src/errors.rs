use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
#[derive(Debug)]
pub enum AppError {
    /// Backing store unreachable or a write/read failed.
    DatabaseError(sqlx::Error),
    /// Requested identifier has no record.
    NotFound(String),
    /// Credit scorer unreachable, timed out, or returned a failure status.
    ScoreUnavailable(String),
    /// Scorer response body did not match the expected JSON shape.
    ScoreProtocol(String),
    /// Scorer returned a score that is not a valid decimal number.
    ScoreFormat(String),
    /// Caller deadline lapsed before the request completed.
    Cancelled(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<AppError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ScoreUnavailable(msg) => write!(f, "Score service unavailable: {}", msg),
            AppError::ScoreProtocol(msg) => write!(f, "Score service protocol error: {}", msg),
            AppError::ScoreFormat(msg) => write!(f, "Invalid score value: {}", msg),
            AppError::Cancelled(msg) => write!(f, "Request cancelled: {}", msg),
            AppError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    /// Logs errors appropriately based on their severity.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::ScoreUnavailable(msg) => {
                tracing::error!("Score service unavailable: {}", msg);
                (StatusCode::BAD_GATEWAY, "Score service unavailable".to_string())
            }
            AppError::ScoreProtocol(msg) => {
                tracing::error!("Score service protocol error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Score service returned an invalid response".to_string(),
                )
            }
            AppError::ScoreFormat(msg) => {
                tracing::error!("Invalid score value: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Score service returned an invalid score".to_string(),
                )
            }
            AppError::Cancelled(msg) => {
                tracing::warn!("Request cancelled: {}", msg);
                (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
            }
            AppError::WithContext { source, context } => {
                // Log full context chain for debugging
                tracing::error!("Error with context: {} -> {}", context, source);
                // Delegate to underlying error's response
                return source.clone().into_response();
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

// Make AppError cloneable for WithContext variant
impl Clone for AppError {
    /// Clones the error.
    ///
    /// Note: `sqlx::Error` is not cloneable, so `DatabaseError` is simplified to `RowNotFound` during cloning.
    fn clone(&self) -> Self {
        match self {
            AppError::DatabaseError(_e) => AppError::DatabaseError(sqlx::Error::RowNotFound),
            AppError::NotFound(msg) => AppError::NotFound(msg.clone()),
            AppError::ScoreUnavailable(msg) => AppError::ScoreUnavailable(msg.clone()),
            AppError::ScoreProtocol(msg) => AppError::ScoreProtocol(msg.clone()),
            AppError::ScoreFormat(msg) => AppError::ScoreFormat(msg.clone()),
            AppError::Cancelled(msg) => AppError::Cancelled(msg.clone()),
            AppError::WithContext { source, context } => AppError::WithContext {
                source: source.clone(),
                context: context.clone(),
            },
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `AppError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }
}

/// Extension for sqlx::Error to add context
impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|e| AppError::WithContext {
            source: Box::new(AppError::DatabaseError(e)),
            context: context.into(),
        })
    }
}
