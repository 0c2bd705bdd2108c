//! Provider-specific profile payloads and their mapping onto a
//! [`FederatedProfile`].

use serde::Deserialize;

use crate::auth::application::domain::entities::{
    FederatedIdentity, FederatedProfile, OAuthProvider,
};
use crate::auth::application::ports::outgoing::IdentityProviderError;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FacebookPictureData {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FacebookPicture {
    pub data: Option<FacebookPictureData>,
}

#[derive(Debug, Deserialize)]
pub struct FacebookMe {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<FacebookPicture>,
}

#[derive(Debug, Deserialize)]
pub struct TwitterUser {
    pub id: String,
    pub name: Option<String>,
    pub username: String,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TwitterMe {
    pub data: TwitterUser,
}

fn display_name(name: Option<String>, fallback: &str) -> String {
    name.map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl TryFrom<GoogleUserInfo> for FederatedProfile {
    type Error = IdentityProviderError;

    fn try_from(info: GoogleUserInfo) -> Result<Self, Self::Error> {
        let email = info
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| IdentityProviderError::InvalidProfile("google: email missing".into()))?;

        Ok(FederatedProfile {
            name: display_name(info.name, &email),
            email,
            identity: FederatedIdentity {
                provider: OAuthProvider::Google,
                provider_id: info.id,
            },
            profile_pic: info.picture,
        })
    }
}

impl From<FacebookMe> for FederatedProfile {
    /// Accounts registered by phone number carry no email; they get a
    /// stable placeholder address derived from the Facebook id.
    fn from(me: FacebookMe) -> Self {
        let email = me
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| format!("{}@facebook.com", me.id));

        FederatedProfile {
            name: display_name(me.name, &email),
            email,
            profile_pic: me.picture.and_then(|p| p.data).and_then(|d| d.url),
            identity: FederatedIdentity {
                provider: OAuthProvider::Facebook,
                provider_id: me.id,
            },
        }
    }
}

impl From<TwitterMe> for FederatedProfile {
    /// The users/me endpoint never exposes an email address.
    fn from(me: TwitterMe) -> Self {
        let user = me.data;
        let email = format!("{}@twitter.com", user.username.to_lowercase());

        FederatedProfile {
            name: display_name(user.name, &user.username),
            email,
            profile_pic: user.profile_image_url,
            identity: FederatedIdentity {
                provider: OAuthProvider::Twitter,
                provider_id: user.id,
            },
        }
    }
}
