//! src/domain/registrant_email.rs

use crate::domain::ValidationError;

/// Email of a registrant, used as the informal unique key of the waitlist.
///
/// Only presence is checked. The value is neither trimmed nor case
/// normalised, so lookups are exact point lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrantEmail(String);

impl RegistrantEmail {
    pub fn parse(s: String) -> Result<RegistrantEmail, ValidationError> {
        if s.trim().is_empty() {
            Err(ValidationError::InvalidEmail(s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RegistrantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrantEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // We just forward to the Display implementation of
        // the wrapped String.
        self.0.fmt(f)
    }
}
