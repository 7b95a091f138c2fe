//! src/domain/mod.rs

mod new_registrant;
mod registrant_email;
mod registrant_name;

pub use new_registrant::{NewRegistrant, RegistrationPayload};
pub use registrant_email::RegistrantEmail;
pub use registrant_name::RegistrantName;

/// Validation error for domain data
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field `{0}`.")]
    MissingField(&'static str),
    #[error("`{0}` is not a valid registrant email.")]
    InvalidEmail(String),
    #[error("`{0}` is not a valid registrant name.")]
    InvalidName(String),
    #[error("Invalid registration payload: {0}")]
    MalformedPayload(String),
}
