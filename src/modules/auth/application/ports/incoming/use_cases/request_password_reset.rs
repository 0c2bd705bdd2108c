use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("No account with that email")]
    AccountNotFound,

    #[error("Reset email could not be sent: {0}")]
    NotificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Raw token as handed to the notifier. Only the web layer decides whether
/// it may also be echoed back to the client.
#[derive(Debug, Clone)]
pub struct IssuedPasswordReset {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait RequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<IssuedPasswordReset, RequestPasswordResetError>;
}
