use async_trait::async_trait;

use crate::auth::application::domain::entities::{PublicUser, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<PublicUser, FetchUserError>;
}
