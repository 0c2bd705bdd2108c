use async_trait::async_trait;

use crate::auth::application::domain::entities::{FederatedProfile, User};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FederatedAuthenticateError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves a provider-verified identity to exactly one account:
/// identity match, then email link, then creation.
#[async_trait]
pub trait FederatedAuthenticateUseCase: Send + Sync {
    async fn execute(&self, profile: FederatedProfile) -> Result<User, FederatedAuthenticateError>;
}
