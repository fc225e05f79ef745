//! SMTP delivery of itinerary notifications.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Error from building or sending a notification email.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("SMTP configuration: {0}")]
    Config(String),
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("building message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// SMTP settings, read from the environment.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub email_address: String,
    pub email_password: String,
}

impl MailerConfig {
    /// Read `SMTP_SERVER`, `SMTP_PORT`, `EMAIL_ADDRESS` and
    /// `EMAIL_PASSWORD`.
    ///
    /// Returns `Ok(None)` when `SMTP_SERVER` is unset (notifications
    /// disabled); a set server with missing or malformed companions is
    /// an error.
    pub fn from_env() -> Result<Option<Self>, NotifyError> {
        let Ok(smtp_server) = std::env::var("SMTP_SERVER") else {
            return Ok(None);
        };

        let require = |name: &str| {
            std::env::var(name)
                .map_err(|_| NotifyError::Config(format!("{name} must be set when SMTP_SERVER is")))
        };
        let smtp_port = require("SMTP_PORT")?
            .parse::<u16>()
            .map_err(|e| NotifyError::Config(format!("SMTP_PORT: {e}")))?;
        let email_address = require("EMAIL_ADDRESS")?;
        let email_password = require("EMAIL_PASSWORD")?;

        Ok(Some(Self {
            smtp_server,
            smtp_port,
            email_address,
            email_password,
        }))
    }
}

/// Sends HTML email over STARTTLS.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Build a mailer from SMTP settings.
    ///
    /// Must be called from within a Tokio runtime: the pooled transport
    /// spawns its housekeeping task at construction.
    pub fn new(config: &MailerConfig) -> Result<Self, NotifyError> {
        let credentials = Credentials::new(
            config.email_address.clone(),
            config.email_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();
        let from = config.email_address.parse::<Mailbox>()?;

        Ok(Self { transport, from })
    }

    /// Send an HTML email to `recipient`.
    pub async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: String,
    ) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)?;

        self.transport.send(message).await?;
        info!(recipient, "notification email sent");
        Ok(())
    }
}
