use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use std::sync::Arc;
use tracing::{error, warn};

use crate::auth::application::domain::entities::{AuthenticatedSession, OAuthProvider};
use crate::auth::application::ports::incoming::use_cases::{
    CompleteOAuthLoginUseCase, FederatedAuthenticateError, FederatedAuthenticateUseCase,
    OAuthLoginError, OAuthLoginStart, StartOAuthLoginUseCase,
};
use crate::auth::application::ports::outgoing::{
    IdentityProvider, IdentityProviderError, OAuthState, TokenProvider,
};

/// 32 random bytes, base64url. Used for PKCE verifiers and state nonces.
fn random_url_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

impl From<IdentityProviderError> for OAuthLoginError {
    fn from(e: IdentityProviderError) -> Self {
        match e {
            IdentityProviderError::NotConfigured(provider) => {
                OAuthLoginError::ProviderNotConfigured(provider)
            }
            IdentityProviderError::Timeout => OAuthLoginError::ProviderTimeout,
            IdentityProviderError::Upstream(msg) | IdentityProviderError::InvalidProfile(msg) => {
                OAuthLoginError::ProviderError(msg)
            }
        }
    }
}

pub struct StartOAuthLoginService {
    identity: Arc<dyn IdentityProvider + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl StartOAuthLoginService {
    pub fn new(
        identity: Arc<dyn IdentityProvider + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self { identity, tokens }
    }
}

#[async_trait]
impl StartOAuthLoginUseCase for StartOAuthLoginService {
    async fn execute(&self, provider: OAuthProvider) -> Result<OAuthLoginStart, OAuthLoginError> {
        let code_verifier = self
            .identity
            .requires_pkce(provider)
            .then(random_url_token);
        let nonce = random_url_token();

        let state = self
            .tokens
            .generate_oauth_state(&OAuthState {
                provider,
                code_verifier: code_verifier.clone(),
                nonce: nonce.clone(),
            })
            .map_err(|e| OAuthLoginError::TokenGenerationFailed(e.to_string()))?;

        let url = self
            .identity
            .authorization_url(provider, &state, code_verifier.as_deref())?;

        Ok(OAuthLoginStart { url, nonce })
    }
}

pub struct CompleteOAuthLoginService {
    identity: Arc<dyn IdentityProvider + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    federated: Arc<dyn FederatedAuthenticateUseCase + Send + Sync>,
}

impl CompleteOAuthLoginService {
    pub fn new(
        identity: Arc<dyn IdentityProvider + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        federated: Arc<dyn FederatedAuthenticateUseCase + Send + Sync>,
    ) -> Self {
        Self {
            identity,
            tokens,
            federated,
        }
    }
}

#[async_trait]
impl CompleteOAuthLoginUseCase for CompleteOAuthLoginService {
    async fn execute(
        &self,
        code: &str,
        state: &str,
        nonce: &str,
    ) -> Result<AuthenticatedSession, OAuthLoginError> {
        let state = self.tokens.verify_oauth_state(state).map_err(|e| {
            warn!("Rejected OAuth callback state: {}", e);
            OAuthLoginError::InvalidState
        })?;

        // The state must come back to the browser that asked for it.
        if nonce.is_empty() || state.nonce != nonce {
            warn!(provider = %state.provider, "OAuth callback nonce does not match state");
            return Err(OAuthLoginError::InvalidState);
        }

        let profile = self
            .identity
            .exchange_code(state.provider, code, state.code_verifier.as_deref())
            .await
            .map_err(|e| {
                error!(provider = %state.provider, "OAuth code exchange failed: {}", e);
                OAuthLoginError::from(e)
            })?;

        let user = self
            .federated
            .execute(profile)
            .await
            .map_err(|e| match e {
                FederatedAuthenticateError::RepositoryError(msg) => {
                    OAuthLoginError::RepositoryError(msg)
                }
            })?;

        let access_token = self
            .tokens
            .generate_access_token(user.id, user.role)
            .map_err(|e| OAuthLoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthenticatedSession {
            user: user.to_public(),
            access_token,
        })
    }
}
