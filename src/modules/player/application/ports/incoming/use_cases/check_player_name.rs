use async_trait::async_trait;

use crate::player::application::domain::InvalidPlayerUid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckPlayerNameError {
    #[error(transparent)]
    InvalidUid(#[from] InvalidPlayerUid),

    #[error("Player not found")]
    PlayerNotFound,

    #[error("Directory error: {0}")]
    DirectoryError(String),
}

#[async_trait]
pub trait CheckPlayerNameUseCase: Send + Sync {
    async fn execute(&self, uid: &str) -> Result<String, CheckPlayerNameError>;
}
