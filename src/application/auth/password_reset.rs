//! Password-reset request flow
//!
//! Demo only: validates the email shape, waits out the fake round trip and
//! confirms. No mail is ever sent.

use tracing::info;

use crate::config::AuthSettings;
use crate::domain::{DomainError, DomainResult};
use crate::notifications::{SharedEventSink, Severity};
use crate::shared::is_valid_email;

pub struct PasswordReset {
    sink: SharedEventSink,
    settings: AuthSettings,
}

impl PasswordReset {
    pub fn new(sink: SharedEventSink, settings: AuthSettings) -> Self {
        Self { sink, settings }
    }

    pub async fn request_reset(&self, email: &str) -> DomainResult<()> {
        let email = email.trim();
        if email.is_empty() {
            self.sink
                .notify("Please enter your email address", Severity::Error)
                .await;
            return Err(DomainError::MissingFields);
        }
        if !is_valid_email(email) {
            self.sink
                .notify("Please enter a valid email address", Severity::Error)
                .await;
            return Err(DomainError::InvalidEmailFormat);
        }

        tokio::time::sleep(self.settings.latency()).await;

        self.sink
            .notify("Password reset link sent to your email!", Severity::Success)
            .await;
        info!(email = %email, "Password reset requested");
        Ok(())
    }
}
