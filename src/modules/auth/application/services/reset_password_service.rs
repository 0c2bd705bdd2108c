use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::domain::password_policy::validate_password;
use crate::auth::application::domain::password_reset::reset_token_digest;
use crate::auth::application::ports::incoming::use_cases::{
    ResetPasswordError, ResetPasswordUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserRepository};

pub struct ResetPasswordService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: R,
    hasher: H,
}

impl<R, H> ResetPasswordService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(repository: R, hasher: H) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R, H> ResetPasswordUseCase for ResetPasswordService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError> {
        if token.trim().is_empty() {
            return Err(ResetPasswordError::InvalidOrExpiredToken);
        }
        validate_password(new_password)?;

        let new_hash = self
            .hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ResetPasswordError::PasswordHashingFailed(e.to_string()))?;

        let digest = reset_token_digest(token);
        let swapped = self
            .repository
            .reset_password_with_token(&digest, new_hash, Utc::now())
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        if !swapped {
            warn!("Password reset attempted with invalid or expired token");
            return Err(ResetPasswordError::InvalidOrExpiredToken);
        }

        info!("Password reset completed");
        Ok(())
    }
}
