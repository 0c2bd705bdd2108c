use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

use crate::auth::application::domain::entities::{OAuthProvider, Role, UserId};
use crate::auth::application::ports::outgoing::token_provider::{
    AccessClaims, OAuthState, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const ACCESS: &str = "access";
const OAUTH_STATE: &str = "oauth_state";

#[derive(Debug, Serialize, Deserialize)]
struct StateClaims {
    provider: OAuthProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pkce: Option<String>,
    nonce: String,
    exp: i64,
    iat: i64,
    nbf: i64,
    iss: String,
    token_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct SignedAccessClaims {
    #[serde(flatten)]
    claims: AccessClaims,
    iss: String,
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        decode::<T>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: UserId, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        self.sign(&SignedAccessClaims {
            claims: AccessClaims {
                sub: user_id.value(),
                role,
                exp: expiration.timestamp(),
                iat: now.timestamp(),
                nbf: now.timestamp(),
                token_type: ACCESS.to_string(),
            },
            iss: self.config.issuer.clone(),
        })
    }

    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let signed: SignedAccessClaims = self.verify(token)?;

        if signed.claims.token_type != ACCESS {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ACCESS,
                signed.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ACCESS.to_string()));
        }

        Ok(signed.claims)
    }

    fn generate_oauth_state(&self, state: &OAuthState) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.oauth_state_expiry);

        self.sign(&StateClaims {
            provider: state.provider,
            pkce: state.code_verifier.clone(),
            nonce: state.nonce.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: OAUTH_STATE.to_string(),
        })
    }

    fn verify_oauth_state(&self, token: &str) -> Result<OAuthState, TokenError> {
        let claims: StateClaims = self.verify(token)?;

        if claims.token_type != OAUTH_STATE {
            return Err(TokenError::InvalidTokenType(OAUTH_STATE.to_string()));
        }

        Ok(OAuthState {
            provider: claims.provider,
            code_verifier: claims.pkce,
            nonce: claims.nonce,
        })
    }
}
