//! Human-readable rendering of outcomes.
//!
//! Front ends hand the [`RenderedOutcome`] text to whatever widget shows the
//! result and use `is_success` to pick its styling.

use crate::model::{BatchOutcome, FailureKind, PushOutcome};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutcome {
    pub text: String,
    pub is_success: bool,
}

pub fn render_push(outcome: &PushOutcome) -> RenderedOutcome {
    let text = match outcome.failure() {
        None => format!("Push succeeded!\n\nResponse data:\n{}", outcome.message()),
        Some(FailureKind::Validation) => outcome.message().to_string(),
        Some(FailureKind::Application) => format!("Push failed: {}", outcome.message()),
        Some(FailureKind::Transport) => format!("Network error: {}", outcome.message()),
    };

    RenderedOutcome {
        text,
        is_success: outcome.succeeded(),
    }
}

/// Renders a batch outcome.
///
/// A completed batch lists every item in the order received, with its error
/// text only when one was reported.
pub fn render_batch(outcome: &BatchOutcome) -> RenderedOutcome {
    let message = outcome.message().unwrap_or_default();
    let text = match outcome.failure() {
        None => {
            let mut text = String::from("Batch push completed!\n\n");
            for item in outcome.items() {
                // Writing into a String cannot fail.
                let _ = writeln!(text, "Item {}: {}", item.index, item.destination);
                let _ = writeln!(text, "Status: {}", item.status);
                if let Some(error) = &item.error {
                    let _ = writeln!(text, "Error: {error}");
                }
                text.push_str("---\n");
            }
            text
        }
        Some(FailureKind::Validation) => message.to_string(),
        Some(FailureKind::Application) => format!("Batch push failed: {message}"),
        Some(FailureKind::Transport) => format!("Batch push network error: {message}"),
    };

    RenderedOutcome {
        text,
        is_success: outcome.succeeded(),
    }
}
