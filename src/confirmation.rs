//! src/confirmation.rs

use crate::configuration::EmailSettings;
use crate::domain::NewRegistrant;
use crate::email_client::EmailClient;
use anyhow::Context;
use std::path::PathBuf;

/// Placeholder in the template replaced by the registrant's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Replaces every occurrence of `{name}` in `template` with `name`.
///
/// The name is inserted as is, it is not HTML-escaped.
pub fn render_template(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

/// The confirmation email sent after a successful registration.
///
/// The template is read from disk on every send.
#[derive(Debug, Clone)]
pub struct ConfirmationEmail {
    subject: String,
    template_path: PathBuf,
}

impl ConfirmationEmail {
    pub fn new(subject: String, template_path: PathBuf) -> Self {
        Self {
            subject,
            template_path,
        }
    }

    pub fn from_settings(settings: &EmailSettings) -> Self {
        Self::new(settings.subject.clone(), settings.template_path.clone())
    }

    #[tracing::instrument(
        name = "Send a confirmation email to a new registrant",
        skip(self, email_client, registrant),
        fields(template = %self.template_path.display())
    )]
    pub async fn send(
        &self,
        email_client: &dyn EmailClient,
        registrant: &NewRegistrant,
    ) -> anyhow::Result<()> {
        let template = tokio::fs::read_to_string(&self.template_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to read email template `{}`.",
                    self.template_path.display()
                )
            })?;
        let html_content = render_template(&template, registrant.name.as_ref());
        email_client
            .send_email(&registrant.email, &self.subject, &html_content)
            .await
    }
}
