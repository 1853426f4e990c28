//! Delivery of composed reports by email.

use anyhow::Result;
use async_trait::async_trait;

mod smtp_mailer;

pub use smtp_mailer::{SmtpMailer, SmtpMailerSettings, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};

/// Sends a single HTML message to the configured recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submit one message. Success means the relay accepted it, not that it was delivered.
    async fn send(&self, subject: &str, html_body: &str) -> Result<()>;
}
