use thiserror::Error;

/// Errors raised while exchanging a request with the push backend.
///
/// A transport error means the exchange could not be completed or did not
/// produce a parseable response. It never describes a backend that answered
/// with `success: false`; that case is an application failure and is carried
/// by the outcome types instead.
///
/// # Error Categories
///
/// ## Client Configuration Errors
/// - [`ClientCreation`] - HTTP client initialization failures
///
/// ## Request Execution Errors
/// - [`RequestFailed`] - Network-level failure with URL and reason
/// - [`Timeout`] - Request timeout with duration and target URL
/// - [`InvalidResponse`] - Body missing, malformed or of the wrong shape
///
/// # Examples
///
/// ```no_run
/// use client::common::errors::TransportError;
///
/// fn log_transport_error(error: &TransportError) {
///     match error {
///         TransportError::Timeout { url, seconds } => {
///             log::warn!("Push request timeout: url={}, duration={}s", url, seconds);
///         }
///         TransportError::InvalidResponse { url, reason } => {
///             log::error!("Unreadable push response: url={}, reason={}", url, reason);
///         }
///         _ => log::error!("Push transport error: {}", error),
///     }
/// }
/// ```
///
/// [`ClientCreation`]: TransportError::ClientCreation
/// [`RequestFailed`]: TransportError::RequestFailed
/// [`Timeout`]: TransportError::Timeout
/// [`InvalidResponse`]: TransportError::InvalidResponse
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// HTTP client initialization failed.
    ///
    /// # Fields
    /// - `reason`: Detailed description of the client creation failure
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// The request could not be sent or no response was received.
    ///
    /// # Fields
    /// - `url`: The URL that was being requested
    /// - `reason`: Detailed description of the failure
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// The request did not complete within the configured timeout.
    ///
    /// # Fields
    /// - `url`: The URL that timed out
    /// - `seconds`: The timeout duration that was exceeded
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },

    /// A response arrived but its body could not be understood.
    ///
    /// # Fields
    /// - `url`: The URL that produced the response
    /// - `reason`: What was wrong with the body
    #[error("Invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

impl TransportError {
    /// Classifies a reqwest error raised while sending a request.
    pub fn from_reqwest(url: &str, timeout_secs: u64, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                seconds: timeout_secs,
            }
        } else {
            Self::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }

    pub fn invalid_response(url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by the submission entry points of the dispatcher.
///
/// Validation, transport and application failures are all reported as failed
/// outcomes. The only condition surfaced as an `Err` is a trigger that arrives
/// while the same submission is still waiting on its exchange, which callers
/// are expected to prevent by disabling the trigger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("A submission is already in flight; wait for it to resolve")]
    AlreadySubmitting,
}
