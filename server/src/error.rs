//! Proxy error taxonomy and its HTTP mapping.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the proxy itself produces is answered with the same
//! envelope shape the upstream API uses, `{ "success": false, "error": ... }`,
//! so the console decodes proxy and upstream failures the same way.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use wire::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream timed out")]
    Timeout,

    #[error("upstream response body could not be read: {0}")]
    Body(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body: Envelope = Envelope::failure(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
