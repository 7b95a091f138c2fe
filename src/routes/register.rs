//! src/routes/register.rs

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::domain::{NewRegistrant, RegistrationPayload, ValidationError};
use crate::error::{Error, WaitlistResult};
use crate::registration::Waitlist;

pub const REGISTRATION_SUCCESS: &str = "Form submitted successfully!";

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct SuccessBody {
    pub message: String,
}

/// Turns extractor rejections (bad JSON, wrong field types, wrong content
/// type) into the JSON error body used by every other failure.
pub fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::from(ValidationError::MalformedPayload(err.to_string())).into()
}

#[tracing::instrument(
    name = "Adding a new registrant.",
    skip(payload, waitlist),
    fields(
        registrant_email = ?payload.email,
        registrant_name = ?payload.name
    )
)]
pub async fn register(
    payload: web::Json<RegistrationPayload>,
    waitlist: web::Data<Waitlist>,
) -> WaitlistResult<HttpResponse> {
    let new_registrant: NewRegistrant = payload.into_inner().try_into()?;
    waitlist.register(&new_registrant).await?;
    Ok(HttpResponse::Ok().json(SuccessBody {
        message: REGISTRATION_SUCCESS.to_string(),
    }))
}
