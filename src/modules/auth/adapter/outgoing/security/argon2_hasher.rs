use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::shared::config::{parse_or, ConfigError};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Small VPS friendly: 4MB memory, 3 iterations, 1 thread
    pub fn new() -> Self {
        Self {
            params: Self::default_params(),
        }
    }

    fn default_params() -> Params {
        Params::new(4 * 1024, 3, 1, None).unwrap_or_default()
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            ConfigError::Invalid {
                key: "ARGON2_*",
                reason: e.to_string(),
            }
        })?;

        Ok(Self { params })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let memory_kib = parse_or("ARGON2_MEMORY_KIB", 4 * 1024u32)?;
        let iterations = parse_or("ARGON2_ITERATIONS", 3u32)?;
        let parallelism = parse_or("ARGON2_PARALLELISM", 1u32)?;

        Self::with_params(memory_kib, iterations, parallelism)
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::MalformedHash)?;

            // Parameters come from the PHC string, not from self.params
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hasher = Argon2Hasher::new();

        let hashed = hasher.hash_password("SecurePassword123").await.unwrap();
        assert!(hashed.starts_with("$argon2id$"));
        assert_ne!(hashed, "SecurePassword123");

        assert!(hasher
            .verify_password("SecurePassword123", &hashed)
            .await
            .unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let hasher = Argon2Hasher::new();

        let a = hasher.hash_password("secret1").await.unwrap();
        let b = hasher.hash_password("secret1").await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_invalid_hash_is_malformed() {
        let hasher = Argon2Hasher::new();

        let result = hasher.verify_password("secret1", "invalid-hash").await;

        assert_eq!(result, Err(HashError::MalformedHash));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(Argon2Hasher::with_params(4 * 1024, 0, 1).is_err());
    }
}
