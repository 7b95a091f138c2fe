//! src/email_client.rs

use crate::domain::RegistrantEmail;
use anyhow::Context;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Outbound mail transport.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &RegistrantEmail,
        subject: &str,
        html_content: &str,
    ) -> anyhow::Result<()>;
}

/// Sends mail through an authenticated SMTP submission server using STARTTLS.
///
/// A new connection is opened for every email.
pub struct SmtpEmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpEmailClient {
    pub fn new(
        smtp_host: &str,
        smtp_port: u16,
        sender: String,
        password: Secret<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let sender_mailbox: Mailbox = sender
            .parse()
            .with_context(|| format!("`{}` is not a valid sender address.", sender))?;
        let credentials = Credentials::new(sender, password.expose_secret().to_owned());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_host)
            .with_context(|| format!("Failed to set up SMTP transport for `{}`.", smtp_host))?
            .port(smtp_port)
            .credentials(credentials)
            .timeout(Some(timeout))
            .build();
        Ok(Self {
            transport,
            sender: sender_mailbox,
        })
    }
}

impl std::fmt::Debug for SmtpEmailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailClient")
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

/// Builds a multipart message carrying a single HTML part.
fn html_message(
    sender: Mailbox,
    recipient: &RegistrantEmail,
    subject: &str,
    html_content: &str,
) -> anyhow::Result<Message> {
    let to: Mailbox = recipient
        .as_ref()
        .parse()
        .with_context(|| format!("`{}` is not a valid recipient address.", recipient))?;
    Message::builder()
        .from(sender)
        .to(to)
        .subject(subject)
        .multipart(MultiPart::mixed().singlepart(SinglePart::html(html_content.to_owned())))
        .context("Failed to build the email message.")
}

#[async_trait]
impl EmailClient for SmtpEmailClient {
    #[tracing::instrument(name = "Send email via SMTP", skip(self, html_content))]
    async fn send_email(
        &self,
        recipient: &RegistrantEmail,
        subject: &str,
        html_content: &str,
    ) -> anyhow::Result<()> {
        let message = html_message(self.sender.clone(), recipient, subject, html_content)?;
        self.transport
            .send(message)
            .await
            .context("Failed to send email via SMTP.")?;
        Ok(())
    }
}
