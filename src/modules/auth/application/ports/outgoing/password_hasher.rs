use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    /// Stored value is not a PHC string this hasher understands.
    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Blocking hash task was cancelled")]
    TaskFailed,
}

/// Slow, salted one-way hashing for account passwords.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a plain mismatch; errors are reserved for unusable hashes.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
