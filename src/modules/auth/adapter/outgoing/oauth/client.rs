use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::error;

use super::config::{ClientCredentials, OAuthConfig};
use super::profiles::{FacebookMe, GoogleUserInfo, TokenResponse, TwitterMe};
use crate::auth::application::domain::entities::{FederatedProfile, OAuthProvider};
use crate::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

const GOOGLE_AUTHORIZE: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

const FACEBOOK_AUTHORIZE: &str = "https://www.facebook.com/v12.0/dialog/oauth";
const FACEBOOK_TOKEN: &str = "https://graph.facebook.com/v12.0/oauth/access_token";
const FACEBOOK_ME: &str = "https://graph.facebook.com/me";

const TWITTER_AUTHORIZE: &str = "https://twitter.com/i/oauth2/authorize";
const TWITTER_TOKEN: &str = "https://api.twitter.com/2/oauth2/token";
const TWITTER_ME: &str = "https://api.twitter.com/2/users/me";

/// RFC 7636 S256 challenge for a PKCE verifier.
pub fn pkce_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

/// Server-side authorization-code flow for Google, Facebook and Twitter.
/// Every outbound call is bounded by the configured timeout.
#[derive(Clone)]
pub struct OAuthClient {
    http: Client,
    config: OAuthConfig,
}

impl OAuthClient {
    pub fn new(config: OAuthConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn credentials(
        &self,
        provider: OAuthProvider,
    ) -> Result<&ClientCredentials, IdentityProviderError> {
        self.config
            .credentials(provider)
            .ok_or(IdentityProviderError::NotConfigured(provider))
    }

    async fn send_json<T: DeserializeOwned>(
        provider: OAuthProvider,
        request: RequestBuilder,
    ) -> Result<T, IdentityProviderError> {
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Upstream bodies go to the log only
            let body = response.text().await.unwrap_or_default();
            error!(provider = %provider, %status, "Provider rejected request: {}", body);
            return Err(IdentityProviderError::Upstream(format!(
                "{} answered {}",
                provider, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                IdentityProviderError::Timeout
            } else {
                IdentityProviderError::InvalidProfile(format!("{}: {}", provider, e))
            }
        })
    }

    async fn google(
        &self,
        creds: &ClientCredentials,
        code: &str,
    ) -> Result<FederatedProfile, IdentityProviderError> {
        let token: TokenResponse = Self::send_json(
            OAuthProvider::Google,
            self.http.post(GOOGLE_TOKEN).form(&[
                ("code", code),
                ("client_id", creds.client_id.as_str()),
                ("client_secret", creds.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ]),
        )
        .await?;

        let info: GoogleUserInfo = Self::send_json(
            OAuthProvider::Google,
            self.http
                .get(GOOGLE_USERINFO)
                .bearer_auth(&token.access_token),
        )
        .await?;

        FederatedProfile::try_from(info)
    }

    async fn facebook(
        &self,
        creds: &ClientCredentials,
        code: &str,
    ) -> Result<FederatedProfile, IdentityProviderError> {
        let token: TokenResponse = Self::send_json(
            OAuthProvider::Facebook,
            self.http.get(FACEBOOK_TOKEN).query(&[
                ("client_id", creds.client_id.as_str()),
                ("client_secret", creds.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("code", code),
            ]),
        )
        .await?;

        let me: FacebookMe = Self::send_json(
            OAuthProvider::Facebook,
            self.http.get(FACEBOOK_ME).query(&[
                ("fields", "id,name,email,picture.type(large)"),
                ("access_token", token.access_token.as_str()),
            ]),
        )
        .await?;

        Ok(FederatedProfile::from(me))
    }

    async fn twitter(
        &self,
        creds: &ClientCredentials,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<FederatedProfile, IdentityProviderError> {
        let verifier = code_verifier.ok_or_else(|| {
            IdentityProviderError::Upstream("twitter login requires a PKCE verifier".into())
        })?;

        let token: TokenResponse = Self::send_json(
            OAuthProvider::Twitter,
            self.http
                .post(TWITTER_TOKEN)
                .basic_auth(&creds.client_id, Some(&creds.client_secret))
                .form(&[
                    ("code", code),
                    ("grant_type", "authorization_code"),
                    ("client_id", creds.client_id.as_str()),
                    ("redirect_uri", self.config.redirect_uri.as_str()),
                    ("code_verifier", verifier),
                ]),
        )
        .await?;

        let me: TwitterMe = Self::send_json(
            OAuthProvider::Twitter,
            self.http
                .get(TWITTER_ME)
                .query(&[("user.fields", "profile_image_url")])
                .bearer_auth(&token.access_token),
        )
        .await?;

        Ok(FederatedProfile::from(me))
    }
}

fn transport_error(e: reqwest::Error) -> IdentityProviderError {
    if e.is_timeout() {
        IdentityProviderError::Timeout
    } else {
        IdentityProviderError::Upstream(e.to_string())
    }
}

#[async_trait]
impl IdentityProvider for OAuthClient {
    fn authorization_url(
        &self,
        provider: OAuthProvider,
        state: &str,
        code_verifier: Option<&str>,
    ) -> Result<String, IdentityProviderError> {
        let creds = self.credentials(provider)?;
        let redirect_uri = self.config.redirect_uri.as_str();
        let client_id = creds.client_id.as_str();

        let url = match provider {
            OAuthProvider::Google => Url::parse_with_params(
                GOOGLE_AUTHORIZE,
                &[
                    ("client_id", client_id),
                    ("redirect_uri", redirect_uri),
                    ("response_type", "code"),
                    ("scope", "openid email profile"),
                    ("state", state),
                ],
            ),
            OAuthProvider::Facebook => Url::parse_with_params(
                FACEBOOK_AUTHORIZE,
                &[
                    ("client_id", client_id),
                    ("redirect_uri", redirect_uri),
                    ("response_type", "code"),
                    ("scope", "email,public_profile"),
                    ("state", state),
                ],
            ),
            OAuthProvider::Twitter => {
                let verifier = code_verifier.ok_or_else(|| {
                    IdentityProviderError::Upstream("twitter login requires a PKCE verifier".into())
                })?;
                let challenge = pkce_challenge(verifier);
                Url::parse_with_params(
                    TWITTER_AUTHORIZE,
                    &[
                        ("client_id", client_id),
                        ("redirect_uri", redirect_uri),
                        ("response_type", "code"),
                        ("scope", "users.read tweet.read"),
                        ("state", state),
                        ("code_challenge", challenge.as_str()),
                        ("code_challenge_method", "S256"),
                    ],
                )
            }
        }
        .map_err(|e| IdentityProviderError::Upstream(e.to_string()))?;

        Ok(url.into())
    }

    fn requires_pkce(&self, provider: OAuthProvider) -> bool {
        provider == OAuthProvider::Twitter
    }

    async fn exchange_code(
        &self,
        provider: OAuthProvider,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<FederatedProfile, IdentityProviderError> {
        let creds = self.credentials(provider)?;

        match provider {
            OAuthProvider::Google => self.google(creds, code).await,
            OAuthProvider::Facebook => self.facebook(creds, code).await,
            OAuthProvider::Twitter => self.twitter(creds, code, code_verifier).await,
        }
    }
}
