//! # Pushdesk Client Library
//!
//! Client-side coordinator for submitting push requests to a push-delivery
//! backend. This library validates operator input, issues single and batch
//! push exchanges, tracks the lifecycle of each submission and turns the
//! backend's responses into immutable, render-ready outcomes.
//!
//! ## Modules
//!
//! - [`api`] - Wire types for the push, batch and history endpoints
//! - [`common`] - Transport and dispatch error types
//! - [`config`] - Client configuration and environment loading
//! - [`dispatcher`] - Submission state machine and the dispatcher itself
//! - [`model`] - Requests, outcomes and the editable batch draft
//! - [`presentation`] - Human-readable rendering of outcomes
//! - [`transport`] - The request/response seam and its HTTP implementation
//! - [`utils`] - Utility functions and helpers
//! - [`validation`] - Input validation for single and batch submissions

pub mod api;
pub mod common;
pub mod config;
pub mod dispatcher;
pub mod model;
pub mod presentation;
pub mod transport;
pub mod utils;
pub mod validation;

pub use config::ClientConfig;
pub use dispatcher::{Dispatcher, Submission, SubmissionState};
pub use model::{BatchDraft, BatchItemOutcome, BatchOutcome, ItemStatus, PushOutcome, PushRequest};
pub use transport::{HttpPushTransport, PushTransport};
