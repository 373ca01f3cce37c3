//! The `{success, data, message}` response envelope.
//!
//! DESIGN
//! ======
//! Responses are first decoded into `Envelope<Value>` so the error branch can
//! be read even when `data` has an unexpected shape. Typed decoding happens
//! afterwards with [`decode_data`] / [`decode_list`], which lets the query
//! cache keep raw JSON payloads and hand out typed views on demand.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Standard response wrapper used by every upstream endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Failed envelope carrying an error string.
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, message: None, error: Some(error.into()) }
    }

    /// Human-readable failure text: `error`, then `message`, then a status fallback.
    #[must_use]
    pub fn failure_message(&self, status: u16) -> String {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.trim().is_empty())
            .map_or_else(|| status_fallback_message(status), str::to_owned)
    }
}

impl Envelope<Value> {
    /// Interpret an HTTP response as an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] for non-2xx statuses or `success: false`, and
    /// [`ApiError::Decode`] when a 2xx body is not an envelope.
    pub fn from_response(status: u16, body: &str) -> Result<Self, ApiError> {
        let ok_status = (200..300).contains(&status);
        match serde_json::from_str::<Self>(body) {
            Ok(envelope) if ok_status && envelope.success => Ok(envelope),
            Ok(envelope) => Err(ApiError::Api { status, message: envelope.failure_message(status) }),
            Err(err) if ok_status => Err(ApiError::Decode(err.to_string())),
            Err(_) => Err(ApiError::Api { status, message: status_fallback_message(status) }),
        }
    }
}

/// Decode a required `data` payload.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when `data` is missing or does not match `T`.
pub fn decode_data<T: DeserializeOwned>(data: Option<Value>) -> Result<T, ApiError> {
    match data {
        None | Some(Value::Null) => Err(ApiError::Decode("response carried no data".to_owned())),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Decode a list payload; a missing or null `data` is an empty list.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when `data` is present but not a list of `T`.
pub fn decode_list<T: DeserializeOwned>(data: Option<Value>) -> Result<Vec<T>, ApiError> {
    match data {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

fn status_fallback_message(status: u16) -> String {
    match status {
        401 => "session expired, sign in again".to_owned(),
        403 => "you do not have access to this resource".to_owned(),
        404 => "resource not found".to_owned(),
        s if (200..300).contains(&s) => "request failed".to_owned(),
        s => format!("request failed: {s}"),
    }
}
