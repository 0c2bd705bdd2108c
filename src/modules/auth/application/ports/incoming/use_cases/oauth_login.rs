use async_trait::async_trait;

use crate::auth::application::domain::entities::{AuthenticatedSession, OAuthProvider};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OAuthLoginError {
    #[error("{0} login is not configured")]
    ProviderNotConfigured(OAuthProvider),

    #[error("Invalid or expired login state")]
    InvalidState,

    #[error("Identity provider timed out")]
    ProviderTimeout,

    #[error("Identity provider error: {0}")]
    ProviderError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Where to send the login popup, and the nonce the starting browser must
/// present again on the callback.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthLoginStart {
    pub url: String,
    pub nonce: String,
}

#[async_trait]
pub trait StartOAuthLoginUseCase: Send + Sync {
    async fn execute(&self, provider: OAuthProvider) -> Result<OAuthLoginStart, OAuthLoginError>;
}

#[async_trait]
pub trait CompleteOAuthLoginUseCase: Send + Sync {
    /// `nonce` is the value the browser sent back with the callback. It must
    /// match the one sealed into `state`.
    async fn execute(
        &self,
        code: &str,
        state: &str,
        nonce: &str,
    ) -> Result<AuthenticatedSession, OAuthLoginError>;
}
