use crate::utils::env::{EnvUtils, EnvVarError};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Content length cap applied to single pushes.
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 5000;

pub const ENV_BASE_URL: &str = "PUSHDESK_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PUSHDESK_REQUEST_TIMEOUT_SECS";

/// Settings for talking to the push backend.
///
/// Can be deserialized from any serde source (fields are optional and fall
/// back to their defaults) or read from the process environment with
/// [`ClientConfig::from_env`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    base_url: String,
    request_timeout_secs: u64,
    max_content_length: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builds a configuration from `PUSHDESK_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::Invalid`] if the timeout is not a whole number
    /// of seconds.
    pub fn from_env() -> Result<Self, EnvVarError> {
        let mut config = Self::default();

        if let Some(base_url) = EnvUtils::get_optional_var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout) = EnvUtils::get_optional_parsed_var::<u64>(ENV_REQUEST_TIMEOUT_SECS)? {
            config.request_timeout_secs = timeout;
        }

        log::debug!(
            "Loaded client config: base_url={}, timeout={}s",
            config.base_url,
            config.request_timeout_secs
        );
        Ok(config)
    }

    pub fn with_request_timeout_secs(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn max_content_length(&self) -> usize {
        self.max_content_length
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.max_content_length(), 5000);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "base_url": "https://push.example.com/" }"#)
                .expect("config should deserialize");
        assert_eq!(config.base_url(), "https://push.example.com");
        assert_eq!(config.request_timeout_secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(
            config.endpoint("/api/push/batch"),
            "https://push.example.com/api/push/batch"
        );
    }
}
