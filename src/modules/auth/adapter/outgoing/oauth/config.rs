use std::time::Duration;

use crate::auth::application::domain::entities::OAuthProvider;
use crate::shared::config::{optional, parse_or, ConfigError};

#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    fn from_env(id_key: &'static str, secret_key: &'static str) -> Option<Self> {
        Some(Self {
            client_id: optional(id_key)?,
            client_secret: optional(secret_key)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// `{APP_URL}/auth/callback`
    pub redirect_uri: String,
    pub timeout: Duration,
    pub google: Option<ClientCredentials>,
    pub facebook: Option<ClientCredentials>,
    pub twitter: Option<ClientCredentials>,
}

impl OAuthConfig {
    pub fn from_env(app_url: &str) -> Result<Self, ConfigError> {
        let timeout_secs = parse_or("OAUTH_TIMEOUT_SECS", 10u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "OAUTH_TIMEOUT_SECS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            redirect_uri: format!("{}/auth/callback", app_url.trim_end_matches('/')),
            timeout: Duration::from_secs(timeout_secs),
            google: ClientCredentials::from_env("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
            facebook: ClientCredentials::from_env("FACEBOOK_APP_ID", "FACEBOOK_APP_SECRET"),
            twitter: ClientCredentials::from_env("TWITTER_CLIENT_ID", "TWITTER_CLIENT_SECRET"),
        })
    }

    pub fn credentials(&self, provider: OAuthProvider) -> Option<&ClientCredentials> {
        match provider {
            OAuthProvider::Google => self.google.as_ref(),
            OAuthProvider::Facebook => self.facebook.as_ref(),
            OAuthProvider::Twitter => self.twitter.as_ref(),
        }
    }
}
