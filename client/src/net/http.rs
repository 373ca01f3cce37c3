//! Low-level JSON transport to the admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the stored
//! bearer token. Server-side (SSR): every call fails fast with a transport
//! error since the console only talks to the API from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome funnels through [`Envelope::from_response`], so callers see
//! one `ApiError` taxonomy regardless of where a request failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde_json::Value;
use wire::{ApiError, Envelope};

/// Path prefix the host server proxies to the upstream API.
pub const API_PREFIX: &str = "/api";

/// HTTP verbs used by the resource clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

pub(crate) fn api_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{API_PREFIX}{path}")
    } else {
        format!("{API_PREFIX}/{path}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Send a request and decode the response envelope.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when no response arrives and the envelope
/// errors described on [`Envelope::from_response`] otherwise.
pub async fn send(method: Method, path: &str, body: Option<Value>) -> Result<Envelope, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = api_url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = crate::util::session::access_token() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if status >= 400 {
            log::warn!("{} {path} failed with {status}", method.as_str());
        }
        Envelope::from_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `GET path`.
///
/// # Errors
///
/// See [`send`].
pub async fn get(path: &str) -> Result<Envelope, ApiError> {
    send(Method::Get, path, None).await
}

/// Send `payload` as a JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `payload` cannot be serialized, otherwise see [`send`].
pub async fn send_json<T: Serialize>(method: Method, path: &str, payload: &T) -> Result<Envelope, ApiError> {
    let body = serde_json::to_value(payload)?;
    send(method, path, Some(body)).await
}
