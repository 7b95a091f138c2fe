//! src/registration.rs

use crate::confirmation::ConfirmationEmail;
use crate::domain::NewRegistrant;
use crate::email_client::EmailClient;
use crate::error::{Error, WaitlistResult};
use crate::store::RegistrantStore;
use std::sync::Arc;

/// Whether the confirmation email went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub confirmation: ConfirmationStatus,
}

/// The registration workflow with its injected service handles.
#[derive(Clone)]
pub struct Waitlist {
    store: Arc<dyn RegistrantStore>,
    email_client: Arc<dyn EmailClient>,
    confirmation: ConfirmationEmail,
}

impl Waitlist {
    pub fn new(
        store: Arc<dyn RegistrantStore>,
        email_client: Arc<dyn EmailClient>,
        confirmation: ConfirmationEmail,
    ) -> Self {
        Self {
            store,
            email_client,
            confirmation,
        }
    }

    /// Adds a registrant unless one with the same email already exists, then
    /// tries to send the confirmation email.
    ///
    /// The duplicate check and the insert are not atomic: concurrent
    /// registrations of the same email may both be stored.
    #[tracing::instrument(
        name = "Registering a new waitlist entry",
        skip(self, new_registrant),
        fields(
            registrant_email = %new_registrant.email,
            registrant_name = %new_registrant.name
        )
    )]
    pub async fn register(
        &self,
        new_registrant: &NewRegistrant,
    ) -> WaitlistResult<RegistrationOutcome> {
        if self
            .store
            .find_by_email(&new_registrant.email)
            .await?
            .is_some()
        {
            return Err(Error::DuplicateRegistration);
        }
        self.store.insert(new_registrant).await?;

        let confirmation = match self
            .confirmation
            .send(self.email_client.as_ref(), new_registrant)
            .await
        {
            Ok(()) => {
                tracing::info!("Confirmation email sent successfully");
                ConfirmationStatus::Sent
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send confirmation email"
                );
                ConfirmationStatus::Failed
            }
        };
        Ok(RegistrationOutcome { confirmation })
    }
}
