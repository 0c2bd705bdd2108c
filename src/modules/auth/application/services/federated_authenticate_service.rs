use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{FederatedProfile, User};
use crate::auth::application::ports::incoming::use_cases::{
    FederatedAuthenticateError, FederatedAuthenticateUseCase,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

pub struct FederatedAuthenticateService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> FederatedAuthenticateService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn resolve_existing(
        &self,
        profile: &FederatedProfile,
    ) -> Result<Option<User>, FederatedAuthenticateError> {
        let identity = &profile.identity;

        if let Some(user) = self
            .query
            .find_by_identity(identity.provider, &identity.provider_id)
            .await
            .map_err(query_error)?
        {
            return Ok(Some(user));
        }

        // First account holding the email absorbs the new identity
        if let Some(existing) = self
            .query
            .find_by_email(&profile.email)
            .await
            .map_err(query_error)?
        {
            let linked = self
                .repository
                .link_identity(existing.id, identity.clone(), profile.profile_pic.clone())
                .await
                .map_err(repository_error)?;

            info!(
                user_id = %linked.id,
                provider = %identity.provider,
                "Linked federated identity to existing account"
            );
            return Ok(Some(linked));
        }

        Ok(None)
    }
}

fn query_error(e: UserQueryError) -> FederatedAuthenticateError {
    FederatedAuthenticateError::RepositoryError(e.to_string())
}

fn repository_error(e: UserRepositoryError) -> FederatedAuthenticateError {
    FederatedAuthenticateError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q, R> FederatedAuthenticateUseCase for FederatedAuthenticateService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, profile: FederatedProfile) -> Result<User, FederatedAuthenticateError> {
        let profile = FederatedProfile {
            email: profile.email.trim().to_lowercase(),
            ..profile
        };

        if let Some(user) = self.resolve_existing(&profile).await? {
            return Ok(user);
        }

        let created = self
            .repository
            .create_user(CreateUserData {
                name: profile.name.clone(),
                email: profile.email.clone(),
                password_hash: None,
                identity: Some(profile.identity.clone()),
                profile_pic: profile.profile_pic.clone(),
            })
            .await;

        match created {
            Ok(user) => {
                info!(
                    user_id = %user.id,
                    provider = %profile.identity.provider,
                    "Created account from federated login"
                );
                Ok(user)
            }
            // A concurrent callback for the same person won the insert
            Err(UserRepositoryError::UserAlreadyExists) => {
                warn!(
                    provider = %profile.identity.provider,
                    "Federated account creation raced, resolving again"
                );
                self.resolve_existing(&profile).await?.ok_or_else(|| {
                    FederatedAuthenticateError::RepositoryError(
                        "account vanished after unique violation".to_string(),
                    )
                })
            }
            Err(e) => Err(repository_error(e)),
        }
    }
}
