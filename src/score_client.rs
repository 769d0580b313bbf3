use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the external credit scoring service.
///
/// Stateless bridge: every call is a fresh round trip, so the service always
/// reflects the scorer's current answer. There is deliberately no caching and
/// no retry around this client.
#[derive(Clone)]
pub struct ScoreClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ScoreRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
}

#[derive(Deserialize)]
struct ScoreResponse {
    score: String,
}

impl ScoreClient {
    /// Creates a new `ScoreClient`.
    ///
    /// # Arguments
    ///
    /// * `url` - The scorer endpoint URL.
    /// * `timeout` - Per-request deadline for the scorer call.
    pub fn new(url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ScoreUnavailable(format!("Failed to create score client: {}", e))
            })?;

        Ok(Self { client, url })
    }

    /// Fetches the credit score for a name pair.
    ///
    /// # Returns
    ///
    /// * `Result<f64, AppError>` - The parsed score, or the most specific
    ///   error the client can detect: `ScoreUnavailable` when the scorer
    ///   cannot be reached (including timeouts and failure statuses),
    ///   `ScoreProtocol` when the body is not the expected JSON shape,
    ///   `ScoreFormat` when the score string is not a decimal number.
    pub async fn get_score(&self, first_name: &str, last_name: &str) -> Result<f64, AppError> {
        tracing::debug!("Fetching credit score from {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&ScoreRequest {
                first_name,
                last_name,
            })
            .send()
            .await
            .map_err(|e| AppError::ScoreUnavailable(format!("Score request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ScoreUnavailable(format!(
                "Scorer returned {}: {}",
                status, error_text
            )));
        }

        let body: ScoreResponse = response.json().await.map_err(|e| {
            AppError::ScoreProtocol(format!("Failed to parse scorer response: {}", e))
        })?;

        parse_score(&body.score)
    }
}

/// Parses the scorer's string-typed score into a float.
pub fn parse_score(raw: &str) -> Result<f64, AppError> {
    raw.parse::<f64>()
        .map_err(|_| AppError::ScoreFormat(format!("score {:?} is not a decimal number", raw)))
}
