//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and one pooled `reqwest::Client` reused by
//! every proxied request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the upstream HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns the client builder error when TLS initialisation fails.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .connect_timeout(Duration::from_secs(config.upstream_connect_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State pointing at `upstream` with short timeouts.
    #[must_use]
    pub fn test_app_state(upstream: &str) -> AppState {
        let config = Config {
            upstream_api_url: upstream.trim_end_matches('/').to_string(),
            port: 0,
            upstream_timeout_secs: 2,
            upstream_connect_timeout_secs: 1,
            log_requests: false,
        };
        AppState::new(config).expect("test http client")
    }
}
