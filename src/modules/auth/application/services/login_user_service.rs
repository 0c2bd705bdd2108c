use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AuthenticatedSession;
use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginRequest, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

pub struct LoginUserService<Q, H>
where
    Q: UserQuery,
    H: PasswordHasher,
{
    query: Q,
    hasher: H,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, H> LoginUserService<Q, H>
where
    Q: UserQuery,
    H: PasswordHasher,
{
    pub fn new(query: Q, hasher: H, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, H> LoginUserUseCase for LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<AuthenticatedSession, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // Social-only accounts have no password to check against
        let Some(password_hash) = user.password_hash.as_deref() else {
            warn!(user_id = %user.id, "Password login attempted on social-only account");
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .hasher
            .verify_password(request.password(), password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(user.id, user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedSession {
            user: user.to_public(),
            access_token,
        })
    }
}
