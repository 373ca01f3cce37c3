//! Error taxonomy for calls against the upstream REST API.

/// Failure of a single API call.
///
/// The console only distinguishes transport failures, API-reported failures,
/// undecodable payloads, and client-side validation. None of them are retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Transport(String),
    /// The API answered with a non-2xx status or `success: false`.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Input was rejected before it was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// True when the API rejected the bearer token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// HTTP status carried by the error, if the API produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
