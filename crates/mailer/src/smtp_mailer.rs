use crate::Mailer;
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Settings to configure a [SmtpMailer].
#[derive(Debug, Clone)]
pub struct SmtpMailerSettings {
    pub host: String,
    pub port: u16,
    /// Sender address; also the SMTP username.
    pub username: String,
    pub password: String,
    pub recipient: String,
}

/// A [Mailer] that submits messages to an SMTP relay over STARTTLS.
pub struct SmtpMailer {
    from: Mailbox,
    to: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Validate the addresses and prepare the relay transport. No connection is opened until a
    /// message is sent.
    pub fn new(settings: SmtpMailerSettings) -> Result<Self> {
        let SmtpMailerSettings {
            host,
            port,
            username,
            password,
            recipient,
        } = settings;
        let from: Mailbox = username
            .parse()
            .with_context(|| format!("Invalid sender email address \"{}\".", username))?;
        let to: Mailbox = recipient
            .parse()
            .with_context(|| format!("Invalid recipient email address \"{}\".", recipient))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
            .with_context(|| format!("Failed to set up STARTTLS for SMTP relay {}.", host))?
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();
        info!(host = %host, port = port, "Configured SMTP relay.");

        Ok(SmtpMailer {
            from,
            to,
            transport,
        })
    }

    fn build_message(&self, subject: &str, html_body: &str) -> Result<Message> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(String::from(html_body))
            .context("Failed to build email message.")
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip(self, html_body))]
    async fn send(&self, subject: &str, html_body: &str) -> Result<()> {
        let message = self.build_message(subject, html_body)?;
        debug!("Submitting message to the SMTP relay.");
        self.transport
            .send(message)
            .await
            .context("Failed to send email via SMTP.")?;
        info!(to = %self.to, "Email accepted by the SMTP relay.");

        Ok(())
    }
}
