use async_trait::async_trait;

use crate::auth::application::domain::password_policy::PasswordPolicyError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError>;
}
