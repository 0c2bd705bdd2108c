use async_trait::async_trait;

use crate::auth::application::domain::entities::{FederatedProfile, OAuthProvider};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("{0} login is not configured")]
    NotConfigured(OAuthProvider),

    #[error("Identity provider did not answer in time")]
    Timeout,

    #[error("Identity provider error: {0}")]
    Upstream(String),

    #[error("Identity provider returned an unusable profile: {0}")]
    InvalidProfile(String),
}

/// Server-side OAuth2 authorization-code flow against a third-party provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn authorization_url(
        &self,
        provider: OAuthProvider,
        state: &str,
        code_verifier: Option<&str>,
    ) -> Result<String, IdentityProviderError>;

    fn requires_pkce(&self, provider: OAuthProvider) -> bool;

    async fn exchange_code(
        &self,
        provider: OAuthProvider,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<FederatedProfile, IdentityProviderError>;
}
