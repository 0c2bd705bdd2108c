use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[derive(Debug, Clone)]
pub struct PasswordResetNotice {
    pub name: String,
    pub email: String,
    /// Raw token; only its digest is persisted
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_password_reset_email(
        &self,
        notice: PasswordResetNotice,
    ) -> Result<(), UserEmailNotificationError>;
}
