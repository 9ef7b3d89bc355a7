//! Configuration for the Nativ client
//!
//! A `NativConfig` holds the optional overrides given at construction. Anything
//! left unset is resolved from the environment when a session is opened.

use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "NATIV_API_KEY";

/// Environment variable overriding the API endpoint
pub const BASE_URL_ENV: &str = "NATIV_BASE_URL";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV: &str = "NATIV_TIMEOUT";

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.usenativ.com";

/// Default timeout for API requests
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Construction-time overrides for the Nativ client
#[derive(Debug, Clone, Default)]
pub struct NativConfig {
    /// API key (falls back to `NATIV_API_KEY`)
    pub api_key: Option<SecretString>,
    /// Endpoint override (falls back to `NATIV_BASE_URL`, then the public API)
    pub base_url: Option<String>,
    /// Request timeout in seconds (falls back to `NATIV_TIMEOUT`, then 30)
    pub timeout_secs: Option<u64>,
}

/// Configuration with every value resolved
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

impl NativConfig {
    /// Create a config from an optional key and endpoint override
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.map(SecretString::from),
            base_url,
            timeout_secs: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the endpoint override
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Resolve against the process environment
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for anything not set explicitly
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match &self.api_key {
            Some(key) if !key.expose_secret().is_empty() => key.clone(),
            _ => lookup(API_KEY_ENV)
                .filter(|k| !k.is_empty())
                .map(SecretString::from)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "No API key given and {} is not set",
                        API_KEY_ENV
                    ))
                })?,
        };

        let base_url = self
            .base_url
            .clone()
            .or_else(|| lookup(BASE_URL_ENV))
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match self.timeout_secs {
            Some(secs) => secs,
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => raw.parse().map_err(|_| {
                    Error::Config(format!("Invalid {}: {}", TIMEOUT_ENV, raw))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(ResolvedConfig {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values_win() {
        let config = NativConfig::new(Some("nativ_explicit".into()), Some("http://localhost:9".into()))
            .with_timeout_secs(5);
        let resolved = config
            .resolve_with(env(&[(API_KEY_ENV, "nativ_env"), (BASE_URL_ENV, "http://env")]))
            .unwrap();

        assert_eq!(resolved.api_key.expose_secret(), "nativ_explicit");
        assert_eq!(resolved.base_url, "http://localhost:9");
        assert_eq!(resolved.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_fallback() {
        let resolved = NativConfig::default()
            .resolve_with(env(&[(API_KEY_ENV, "nativ_env"), (TIMEOUT_ENV, "12")]))
            .unwrap();

        assert_eq!(resolved.api_key.expose_secret(), "nativ_env");
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_missing_key() {
        let err = NativConfig::default().resolve_with(env(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_bad_timeout() {
        let err = NativConfig::default()
            .with_api_key("nativ_x")
            .resolve_with(env(&[(TIMEOUT_ENV, "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = NativConfig::new(Some("nativ_secret_value".into()), None);
        assert!(!format!("{:?}", config).contains("nativ_secret_value"));
    }
}
