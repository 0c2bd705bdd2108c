use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{FederatedIdentity, User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub identity: Option<FederatedIdentity>,
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// New accounts always start with a zero wallet balance.
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Writes provider, provider id and picture onto an existing account.
    async fn link_identity(
        &self,
        user_id: UserId,
        identity: FederatedIdentity,
        profile_pic: Option<String>,
    ) -> Result<User, UserRepositoryError>;

    /// Replaces any previously issued token for the user.
    async fn store_reset_token(
        &self,
        user_id: UserId,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Clears the user's token only if it is still the one with this digest.
    async fn revoke_reset_token(
        &self,
        user_id: UserId,
        token_digest: &str,
    ) -> Result<(), UserRepositoryError>;

    /// Swaps the password and clears the token in one statement. Returns
    /// `false` when no account holds an unexpired token with that digest.
    async fn reset_password_with_token(
        &self,
        token_digest: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<bool, UserRepositoryError>;
}
