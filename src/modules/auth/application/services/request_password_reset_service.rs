use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::password_reset::IssuedResetToken;
use crate::auth::application::ports::incoming::use_cases::{
    IssuedPasswordReset, RequestPasswordResetError, RequestPasswordResetUseCase,
};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::email::application::ports::outgoing::user_email_notifier::{
    PasswordResetNotice, UserEmailNotifier,
};

pub struct RequestPasswordResetService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> RequestPasswordResetService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn UserEmailNotifier + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> RequestPasswordResetUseCase for RequestPasswordResetService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<IssuedPasswordReset, RequestPasswordResetError> {
        let email = email.trim().to_lowercase();

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                warn!("Password reset requested for unknown email");
                RequestPasswordResetError::AccountNotFound
            })?;

        let issued = IssuedResetToken::generate(Utc::now());

        // Overwrites any earlier token, so only the newest link works
        self.repository
            .store_reset_token(user.id, issued.digest.clone(), issued.expires_at)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, "Failed to store reset token: {}", e);
                RequestPasswordResetError::RepositoryError(e.to_string())
            })?;

        let sent = self
            .notifier
            .send_password_reset_email(PasswordResetNotice {
                name: user.name.clone(),
                email: user.email.clone(),
                token: issued.raw.clone(),
                expires_at: issued.expires_at,
            })
            .await;

        if let Err(e) = sent {
            error!(user_id = %user.id, "Failed to dispatch reset email: {}", e);
            // No one was told about this token, so it must not stay usable.
            if let Err(revoke) = self
                .repository
                .revoke_reset_token(user.id, &issued.digest)
                .await
            {
                error!(user_id = %user.id, "Failed to revoke undelivered reset token: {}", revoke);
            }
            return Err(RequestPasswordResetError::NotificationFailed(e.to_string()));
        }

        info!(user_id = %user.id, "Password reset token issued");

        Ok(IssuedPasswordReset {
            token: issued.raw,
            expires_at: issued.expires_at,
        })
    }
}
