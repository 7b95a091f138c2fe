//! src/domain/new_registrant.rs

use crate::domain::{RegistrantEmail, RegistrantName, ValidationError};

/// Raw body of `POST /register`.
///
/// Both fields are optional at the deserialization level so that an absent
/// field ends up as a [`ValidationError::MissingField`] with a JSON error body,
/// instead of the extractor's generic rejection.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone)]
pub struct RegistrationPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRegistrant {
    pub email: RegistrantEmail,
    pub name: RegistrantName,
}

impl TryFrom<RegistrationPayload> for NewRegistrant {
    type Error = ValidationError;

    fn try_from(value: RegistrationPayload) -> Result<Self, Self::Error> {
        let name = value.name.ok_or(ValidationError::MissingField("name"))?;
        let email = value.email.ok_or(ValidationError::MissingField("email"))?;
        let name = RegistrantName::parse(name)?;
        let email = RegistrantEmail::parse(email)?;
        Ok(Self { email, name })
    }
}
