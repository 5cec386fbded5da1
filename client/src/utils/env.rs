//! Environment variable access for client configuration.
//!
//! Values are trimmed before use and a variable that is set but blank is
//! treated the same as one that is missing, so a stray `PUSHDESK_BASE_URL=`
//! in a shell profile does not override the defaults with an empty string.

use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when reading environment variables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvVarError {
    /// Environment variable is not set
    #[error("Environment variable '{name}' not found")]
    NotFound { name: String },

    /// Environment variable contains invalid UTF-8 characters
    #[error("Environment variable '{name}' contains invalid UTF-8 characters")]
    InvalidUtf8 { name: String },

    /// Environment variable is set but contains only whitespace or is empty
    #[error("Environment variable '{name}' is empty")]
    Empty { name: String },

    /// Environment variable is set but its value cannot be parsed
    #[error("Environment variable '{name}' has invalid value '{value}': {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

/// Helpers for reading validated environment variables.
///
/// # Examples
///
/// ```no_run
/// use client::utils::env::EnvUtils;
///
/// let base_url = EnvUtils::get_optional_var("PUSHDESK_BASE_URL")
///     .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());
/// let timeout: Option<u64> = EnvUtils::get_optional_parsed_var("PUSHDESK_REQUEST_TIMEOUT_SECS")?;
/// ```
pub struct EnvUtils;

impl EnvUtils {
    /// Gets an environment variable, trimmed, rejecting missing or blank values.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::NotFound`], [`EnvVarError::Empty`] or
    /// [`EnvVarError::InvalidUtf8`].
    pub fn get_validated_var(name: &str) -> Result<String, EnvVarError> {
        match std::env::var(name) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(EnvVarError::Empty {
                        name: name.to_string(),
                    })
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(std::env::VarError::NotPresent) => Err(EnvVarError::NotFound {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(EnvVarError::InvalidUtf8 {
                name: name.to_string(),
            }),
        }
    }

    /// Gets an optional environment variable.
    ///
    /// Returns `None` if the variable is missing, blank or not valid UTF-8.
    pub fn get_optional_var(name: &str) -> Option<String> {
        Self::get_validated_var(name).ok()
    }

    /// Gets an optional environment variable and parses it.
    ///
    /// A missing or blank variable yields `Ok(None)`. A variable that is
    /// present but fails to parse is an error rather than being ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EnvVarError::Invalid`] when the value does not parse as `T`.
    pub fn get_optional_parsed_var<T>(name: &str) -> Result<Option<T>, EnvVarError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(value) = Self::get_optional_var(name) else {
            return Ok(None);
        };

        value
            .parse::<T>()
            .map(Some)
            .map_err(|e| EnvVarError::Invalid {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })
    }
}
