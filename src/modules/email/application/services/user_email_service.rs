use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::{
    PasswordResetNotice, UserEmailNotificationError, UserEmailNotifier,
};

/// Renders account emails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_url: &str) -> Self {
        Self {
            sender,
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn reset_link(&self, token: &str) -> String {
        format!("{}/reset-password?token={}", self.app_url, token)
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_password_reset_email(
        &self,
        notice: PasswordResetNotice,
    ) -> Result<(), UserEmailNotificationError> {
        let link = self.reset_link(&notice.token);
        let body = format!(
            "<p>Hi {name},</p>\
             <p>We received a request to reset your password. \
             <a href=\"{link}\">Choose a new password</a>.</p>\
             <p>The link expires at {expires} UTC. If you did not ask for this, ignore this email.</p>",
            name = notice.name,
            link = link,
            expires = notice.expires_at.format("%Y-%m-%d %H:%M"),
        );

        self.sender
            .send_email(&notice.email, "Reset your password", &body)
            .await
            .map_err(|e| UserEmailNotificationError::EmailSendingFailed(e.to_string()))?;

        info!(email = %notice.email, "Password reset email dispatched");
        Ok(())
    }
}
