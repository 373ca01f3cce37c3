use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_upstream_is_set() {
    let cfg = Config::from_lookup(lookup(&[("UPSTREAM_API_URL", "https://api.example.com/v1/")])).unwrap();
    assert_eq!(cfg.upstream_api_url, "https://api.example.com/v1");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
    assert_eq!(cfg.upstream_connect_timeout_secs, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS);
    assert!(cfg.log_requests);
}

#[test]
fn missing_upstream_is_an_error() {
    assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing("UPSTREAM_API_URL")));
    assert_eq!(
        Config::from_lookup(lookup(&[("UPSTREAM_API_URL", "  ")])),
        Err(ConfigError::Missing("UPSTREAM_API_URL"))
    );
}

#[test]
fn upstream_must_be_http() {
    let err = Config::from_lookup(lookup(&[("UPSTREAM_API_URL", "api.example.com")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "UPSTREAM_API_URL", .. }));
}

#[test]
fn overrides_are_parsed() {
    let cfg = Config::from_lookup(lookup(&[
        ("UPSTREAM_API_URL", "http://localhost:5000"),
        ("PORT", "8080"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
        ("LOG_REQUESTS", "off"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_timeout_secs, 5);
    assert!(!cfg.log_requests);
}

#[test]
fn bad_port_names_the_key() {
    let err = Config::from_lookup(lookup(&[("UPSTREAM_API_URL", "http://localhost:5000"), ("PORT", "http")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "http".into() });
}

#[test]
fn env_bool_accepts_common_spellings() {
    assert_eq!(env_bool("TRUE"), Some(true));
    assert_eq!(env_bool(" yes "), Some(true));
    assert_eq!(env_bool("0"), Some(false));
    assert_eq!(env_bool("Off"), Some(false));
    assert_eq!(env_bool("maybe"), None);
}
