use crate::errors::AppError;
use crate::models::{CreateUserRequest, CreateUserResponse, UserResponse};
use crate::score_client::ScoreClient;
use crate::store::UserStore;

/// Composes the store and the score client into the two public operations.
///
/// Holds no state of its own beyond the two adapters, which live for the
/// whole process; each call is independent.
pub struct UserService {
    store: UserStore,
    score_client: ScoreClient,
}

impl UserService {
    pub fn new(store: UserStore, score_client: ScoreClient) -> Self {
        Self {
            store,
            score_client,
        }
    }

    /// Creates a user record and returns its identifier.
    ///
    /// Delegates to the store; store errors propagate unchanged.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<CreateUserResponse, AppError> {
        let id = self
            .store
            .create_user(&req.first_name, &req.last_name, req.date_of_birth)
            .await?;
        Ok(CreateUserResponse { id })
    }

    /// Looks up a user and enriches it with a freshly fetched credit score.
    ///
    /// The read happens first; a store failure returns immediately without
    /// touching the scorer. A scorer failure fails the whole lookup; the
    /// record is never returned without its score.
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.store.get_user(id).await?;

        let credit_score = self
            .score_client
            .get_score(&user.first_name, &user.last_name)
            .await?;

        Ok(UserResponse {
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            credit_score,
        })
    }
}
