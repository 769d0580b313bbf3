use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============ Database Models ============

/// A user record as persisted in the backing store.
///
/// The identifier is minted once at creation time and is the sole lookup key;
/// records are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// First name, stored as provided.
    pub first_name: String,
    /// Last name, stored as provided.
    pub last_name: String,
    /// Date of birth (UTC).
    pub date_of_birth: DateTime<Utc>,
}

// ============ API Models ============

/// Payload for `POST /api/v1/users`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
}

/// Response for `POST /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Identifier of the newly created user.
    pub id: String,
}

/// Response for `GET /api/v1/users/:id`.
///
/// The credit score is fetched from the external scorer on every lookup, so
/// two reads of the same user can carry different scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub credit_score: f64,
}
