//! `/api/{*path}` passthrough to the upstream REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Each `/api/...` request is
//! replayed against `UPSTREAM_API_URL` with the same method, query string,
//! body, `Authorization` and `Content-Type`; the upstream status and body are
//! relayed unchanged. Only transport failures are answered locally.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;

/// Upstream URL for a proxied `path` and optional raw query string.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/{path}?{query}"),
        None => format!("{base}/{path}"),
    }
}

/// Proxied part of a request path, still percent-encoded.
#[must_use]
pub fn proxied_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix("/api").unwrap_or(path)
}

/// Forward one request upstream and relay the answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the upstream cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.upstream_api_url, proxied_path(&uri), uri.query());
    tracing::debug!(%method, %url, "proxying request");

    let mut request = state.http.request(method.clone(), &url);
    for name in [AUTHORIZATION, CONTENT_TYPE] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.inspect_err(|e| {
        tracing::warn!(%method, %url, error = %e, "upstream request failed");
    })?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut response = Response::builder().status(status);
    if let Some(content_type) = content_type {
        response = response.header(CONTENT_TYPE, content_type);
    }
    response.body(Body::from(bytes)).map_err(|e| ProxyError::Body(e.to_string()))
}
