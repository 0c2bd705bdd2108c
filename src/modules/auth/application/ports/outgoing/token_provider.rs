use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{OAuthProvider, Role, UserId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims of a bearer access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

/// Round-tripped through the provider as the OAuth `state` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthState {
    pub provider: OAuthProvider,
    /// PKCE verifier, only for providers that require one
    pub code_verifier: Option<String>,
    /// Also set as a cookie on the browser that started the login.
    pub nonce: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: UserId, role: Role) -> Result<String, TokenError>;
    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError>;
    fn generate_oauth_state(&self, state: &OAuthState) -> Result<String, TokenError>;
    fn verify_oauth_state(&self, token: &str) -> Result<OAuthState, TokenError>;
}
