use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};

use crate::auth::application::domain::entities::AuthenticatedSession;
use crate::auth::application::domain::password_policy::{validate_password, PasswordPolicyError};

// ========================= Register Request =========================
/// Validated registration request, checked while deserializing.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserRequestError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must be at most 100 characters")]
    NameTooLong,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error(transparent)]
    Password(#[from] PasswordPolicyError),
}

impl RegisterUserRequest {
    pub fn new(
        name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserRequestError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterUserRequestError::EmptyName);
        }
        if name.chars().count() > 100 {
            return Err(RegisterUserRequestError::NameTooLong);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(RegisterUserRequestError::InvalidEmailFormat);
        }

        validate_password(&password)?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for RegisterUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            name: String,
            email: String,
            password: String,
        }

        let helper = Helper::deserialize(deserializer)?;
        RegisterUserRequest::new(helper.name, helper.email, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

// ========================= Register Error =========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<AuthenticatedSession, RegisterUserError>;
}
