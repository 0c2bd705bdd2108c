use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::domain::entities::AuthenticatedSession;
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserRequest, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};

pub struct RegisterUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    repository: R,
    hasher: H,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R, H> RegisterUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(repository: R, hasher: H, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H> RegisterUserUseCase for RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<AuthenticatedSession, RegisterUserError> {
        let password_hash = self
            .hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterUserError::PasswordHashingFailed(e.to_string()))?;

        // Uniqueness is left to the unique index so two concurrent
        // registrations cannot both pass a pre-check.
        let user = self
            .repository
            .create_user(CreateUserData {
                name: request.name().to_string(),
                email: request.email().to_string(),
                password_hash: Some(password_hash),
                identity: None,
                profile_pic: None,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::DuplicateEmail,
                other => {
                    error!("Failed to create user: {}", other);
                    RegisterUserError::RepositoryError(other.to_string())
                }
            })?;

        let access_token = self
            .tokens
            .generate_access_token(user.id, user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthenticatedSession {
            user: user.to_public(),
            access_token,
        })
    }
}
