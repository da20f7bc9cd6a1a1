//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod campaign;
mod id;
mod import_contacts;
mod lists;
mod message;
mod send_email;
mod subscribe;

pub use campaign::{
    decode_create_campaign_json_response, decode_get_campaign_status_json_response,
    encode_create_campaign_form, encode_get_campaign_status_form,
};
pub use import_contacts::{decode_import_contacts_json_response, encode_import_contacts_form};
pub use lists::{
    decode_create_list_json_response, decode_get_lists_json_response, encode_create_list_form,
};
pub use message::{decode_create_email_message_json_response, encode_create_email_message_form};
pub use send_email::{decode_send_email_json_response, encode_send_email_form};
pub use subscribe::{
    decode_subscribe_json_response, decode_unsubscribe_json_response, encode_subscribe_form,
    encode_unsubscribe_form,
};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ApiErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains neither result nor error")]
    MissingResult,

    #[error("response contains a non-numeric identifier: {value}")]
    InvalidId { value: String },
}

/// Decoded Unisender response envelope: the method's result payload, or the
/// failure the API reported in its `error`/`code` fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiReply<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiReply<U> {
        match self {
            Self::Success(value) => ApiReply::Success(f(value)),
            Self::Failure(failure) => ApiReply::Failure(failure),
        }
    }

    fn try_map<U>(self, f: impl FnOnce(T) -> Result<U, TransportError>) -> Result<ApiReply<U>, TransportError> {
        match self {
            Self::Success(value) => Ok(ApiReply::Success(f(value)?)),
            Self::Failure(failure) => Ok(ApiReply::Failure(failure)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: String,
    pub code: Option<ApiErrorCode>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct RawEnvelope<T> {
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Split a response body into result payload vs API-reported error. The
/// `error` field wins when both are present.
fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<ApiReply<T>, TransportError> {
    let raw: RawEnvelope<T> = serde_json::from_str(json)?;
    if let Some(message) = raw.error {
        return Ok(ApiReply::Failure(ApiFailure {
            message,
            code: raw.code.map(ApiErrorCode::new),
        }));
    }
    match raw.result {
        Some(result) => Ok(ApiReply::Success(result)),
        None => Err(TransportError::MissingResult),
    }
}

/// Variant for methods whose success payload carries no data. Unisender
/// returns `{}` or `null` as the result there, so the payload is not
/// required, only the absence of `error`.
fn decode_unit_envelope(json: &str) -> Result<ApiReply<()>, TransportError> {
    let raw: RawEnvelope<serde_json::Value> = serde_json::from_str(json)?;
    if let Some(message) = raw.error {
        return Ok(ApiReply::Failure(ApiFailure {
            message,
            code: raw.code.map(ApiErrorCode::new),
        }));
    }
    Ok(ApiReply::Success(()))
}
