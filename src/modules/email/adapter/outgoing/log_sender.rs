use async_trait::async_trait;
use tracing::info;

use crate::email::application::ports::outgoing::email_sender::{EmailSendError, EmailSender};

/// Writes outgoing mail to the log instead of a relay. Used when no SMTP
/// server is configured, so reset links stay reachable in development.
#[derive(Debug, Default, Clone)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError> {
        info!(to = %to, subject = %subject, "Outgoing email (log transport)\n{}", body);
        Ok(())
    }
}
