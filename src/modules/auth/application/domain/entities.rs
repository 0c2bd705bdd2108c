use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Unknown labels never grant privileges.
    pub fn from_db(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Facebook,
    Twitter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported provider: {0}")]
pub struct UnknownProvider(pub String);

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Twitter => "twitter",
        }
    }
}

impl FromStr for OAuthProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "facebook" => Ok(OAuthProvider::Facebook),
            "twitter" => Ok(OAuthProvider::Twitter),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// (provider, provider-assigned id) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentity {
    pub provider: OAuthProvider,
    pub provider_id: String,
}

/// Identity as reported by a provider after a verified code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedProfile {
    pub name: String,
    pub email: String,
    pub identity: FederatedIdentity,
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub wallet_balance: i64,
    pub role: Role,
    pub identity: Option<FederatedIdentity>,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.value(),
            name: self.name.clone(),
            email: self.email.clone(),
            wallet_balance: self.wallet_balance,
            role: self.role,
            profile_pic: self.profile_pic.clone(),
        }
    }
}

/// Everything a client may see about an account. Never carries credentials.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PublicUser {
    pub id: Uuid,
    #[schema(example = "Rahim Uddin")]
    pub name: String,
    #[schema(example = "rahim@example.com")]
    pub email: String,
    /// Whole taka
    #[schema(example = 250)]
    pub wallet_balance: i64,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// A user plus the bearer token issued for them.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedSession {
    pub user: PublicUser,
    pub access_token: String,
}
