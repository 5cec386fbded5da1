//! Submission lifecycle and dispatch.
//!
//! [`Submission`] tracks whether a trigger may fire; [`Dispatcher`] validates
//! input, performs the single exchange and produces the outcome.

mod push_dispatcher;
mod submission;

pub use push_dispatcher::Dispatcher;
pub use submission::{Submission, SubmissionState};
