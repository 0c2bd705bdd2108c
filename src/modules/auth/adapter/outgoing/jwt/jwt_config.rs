use crate::shared::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
    pub oauth_state_expiry: i64,  // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", 86_400i64)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        let issuer = parse_or("JWT_ISSUER", "topup-store".to_string())?;

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            oauth_state_expiry: 600,
        })
    }
}
