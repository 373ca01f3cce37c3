//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the upstream REST API, without a trailing slash.
    pub upstream_api_url: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,
    pub upstream_connect_timeout_secs: u64,
    /// Attach the request trace layer.
    pub log_requests: bool,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `UPSTREAM_API_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `LOG_REQUESTS`: default true
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the upstream URL is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_api_url = lookup("UPSTREAM_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("UPSTREAM_API_URL"))?;
        if !upstream_api_url.starts_with("http://") && !upstream_api_url.starts_with("https://") {
            return Err(ConfigError::Invalid { key: "UPSTREAM_API_URL", value: upstream_api_url });
        }

        Ok(Self {
            upstream_api_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            upstream_timeout_secs: parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?,
            upstream_connect_timeout_secs: parse_or(
                &lookup,
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
            log_requests: match lookup("LOG_REQUESTS") {
                None => true,
                Some(raw) => env_bool(&raw).ok_or(ConfigError::Invalid { key: "LOG_REQUESTS", value: raw })?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Parse the usual spellings of a boolean flag.
#[must_use]
pub fn env_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
