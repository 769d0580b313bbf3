use crate::errors::{AppError, ResultExt};
use crate::models::User;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence adapter for user records.
///
/// Owns the mapping from identifier to record in the backing store. The store
/// performs no input validation; names and dates are written as provided.
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Mints a fresh identifier, writes the record under it, and returns the
    /// identifier in its string form.
    pub async fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let id = mint_id();

        sqlx::query(
            "INSERT INTO users (id, first_name, last_name, date_of_birth) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(date_of_birth)
        .execute(&self.pool)
        .await
        .context("error while writing user record")?;

        tracing::info!("Created user {}", id);
        Ok(id.to_string())
    }

    /// Reads the record keyed by `id`.
    ///
    /// An identifier with no record, including one that does not parse as an
    /// identifier at all, is `NotFound`; any other backing-store failure is a
    /// database error. No side effects.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let key = Uuid::try_parse(id)
            .map_err(|_| AppError::NotFound(format!("User with id {} not found", id)))?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, date_of_birth FROM users WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .context("error while reading user record")?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;

        Ok(user)
    }
}

/// Mints a new user identifier.
///
/// UUID v4 carries 122 bits drawn from the OS CSPRNG, so identifiers are
/// neither guessable nor ordered by creation time.
pub fn mint_id() -> Uuid {
    Uuid::new_v4()
}
