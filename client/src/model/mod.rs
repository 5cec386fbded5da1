//! Requests and outcomes exchanged between the validator, the dispatcher and
//! the presentation layer.
//!
//! Requests are only built by [`crate::validation`], so holding a
//! [`PushRequest`] means the input already passed the rules of the path that
//! produced it. Outcomes are terminal: they expose read accessors only.

mod draft;

pub use draft::{BatchDraft, BatchEntry};

use crate::common::TransportError;
use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use std::fmt;

/// Placeholder message used when a successful push returns no data.
pub const NO_DATA_PLACEHOLDER: &str = "no data returned";
/// Message of a batch outcome whose filtered request list was empty.
pub const NO_VALID_ITEMS: &str = "no valid items";
/// Message used when the backend reports a failure without saying why.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// A single push: a destination address and its textual content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    destination: String,
    content: String,
}

impl PushRequest {
    pub(crate) fn new(destination: String, content: String) -> Self {
        Self {
            destination,
            content,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.destination, self.content)
    }
}

/// Which layer produced a failed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input was rejected locally; nothing was sent.
    Validation,
    /// The exchange did not complete or the response was unreadable.
    Transport,
    /// The backend answered and reported the operation as unsuccessful.
    Application,
}

/// Result of a single push submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    succeeded: bool,
    message: String,
    failure: Option<FailureKind>,
}

impl PushOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            failure: None,
        }
    }

    pub fn validation_failed(error: &ValidationError) -> Self {
        Self::failed(FailureKind::Validation, error.to_string())
    }

    pub fn transport_failed(error: &TransportError) -> Self {
        Self::failed(FailureKind::Transport, error.to_string())
    }

    pub fn application_failed(reason: impl Into<String>) -> Self {
        Self::failed(FailureKind::Application, reason.into())
    }

    fn failed(kind: FailureKind, message: String) -> Self {
        Self {
            succeeded: false,
            message,
            failure: Some(kind),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Server payload on success, failure description otherwise.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }
}

/// Delivery status the backend reported for one batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Success,
    Failure,
}

impl ItemStatus {
    pub fn is_success(self) -> bool {
        matches!(self, ItemStatus::Success)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Success => write!(f, "success"),
            ItemStatus::Failure => write!(f, "failure"),
        }
    }
}

/// Per-item result of a successful batch exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItemOutcome {
    /// 1-based position within the submitted (post-filter) batch
    pub index: u32,
    pub destination: String,
    pub status: ItemStatus,
    /// Error text, `None` when the backend reported no error
    pub error: Option<String>,
}

/// Result of a batch push submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    succeeded: bool,
    items: Vec<BatchItemOutcome>,
    message: Option<String>,
    failure: Option<FailureKind>,
}

impl BatchOutcome {
    /// The backend accepted the batch; `items` are kept in server order.
    pub fn completed(items: Vec<BatchItemOutcome>) -> Self {
        Self {
            succeeded: true,
            items,
            message: None,
            failure: None,
        }
    }

    pub fn no_valid_items() -> Self {
        Self::failed(FailureKind::Validation, NO_VALID_ITEMS.to_string())
    }

    pub fn transport_failed(error: &TransportError) -> Self {
        Self::failed(FailureKind::Transport, error.to_string())
    }

    pub fn application_failed(reason: impl Into<String>) -> Self {
        Self::failed(FailureKind::Application, reason.into())
    }

    fn failed(kind: FailureKind, message: String) -> Self {
        Self {
            succeeded: false,
            items: Vec::new(),
            message: Some(message),
            failure: Some(kind),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn items(&self) -> &[BatchItemOutcome] {
        &self.items
    }

    /// Failure description; `None` for a completed batch.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|item| item.status.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.items.len() - self.success_count()
    }
}

/// Push history as returned by the backend at startup.
///
/// The payload shape is owned by the backend and kept opaque here.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub data: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
}
