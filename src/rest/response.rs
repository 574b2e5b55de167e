//! Response envelope validation.
//!
//! Nobitex wraps every payload in an object carrying a `status` field that is
//! `"ok"` on success. A response is accepted only if all of the following hold,
//! checked in order:
//!
//! 1. the HTTP status code is in `200..300`,
//! 2. the body decodes as JSON,
//! 3. the decoded object has a `status` key,
//! 4. that status equals `ok`, ignoring ASCII case.
//!
//! The first failed check decides the error variant.

use serde_json::Value;

use crate::error::{CallContext, NobitexError};

/// Envelope key holding the status on regular endpoints.
pub const STATUS_KEY: &str = "status";

/// An HTTP response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Final URL of the request.
    pub url: String,
    /// Response body as text.
    pub text: String,
}

impl RawResponse {
    /// Create a raw response from its parts.
    pub fn new(status: u16, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            text: text.into(),
        }
    }

    /// Whether the status code is in `200..300`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.text)
    }
}

/// Validate a response against the standard envelope and return its body.
///
/// The decoded body is returned unchanged; picking out the payload is left to
/// the caller.
pub fn validate_response(context: &CallContext, raw: &RawResponse) -> Result<Value, NobitexError> {
    validate_envelope(context, raw, STATUS_KEY)
}

/// Check the HTTP status and decode the body, without looking at the envelope.
pub fn decode_response(context: &CallContext, raw: &RawResponse) -> Result<Value, NobitexError> {
    if !raw.is_success() {
        return Err(NobitexError::StatusCode {
            context: context.clone(),
            status: raw.status,
            message: raw.text.clone(),
        });
    }

    raw.json().map_err(|e| NobitexError::BodyDecoding {
        context: context.clone(),
        message: format!("{e} | {}", raw.text),
    })
}

/// Validate a response whose status lives under `status_key`.
pub fn validate_envelope(
    context: &CallContext,
    raw: &RawResponse,
    status_key: &str,
) -> Result<Value, NobitexError> {
    let body = decode_response(context, raw)?;

    let Some(status) = body.get(status_key) else {
        return Err(NobitexError::InvalidResponse {
            context: context.clone(),
            message: format!("{status_key} key not found"),
            body: None,
        });
    };

    let is_ok = status
        .as_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("ok"));
    if !is_ok {
        return Err(NobitexError::InvalidResponse {
            context: context.clone(),
            message: format!("response status is not ok | {body}"),
            body: Some(body),
        });
    }

    Ok(body)
}
