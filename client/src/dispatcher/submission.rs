use crate::common::DispatchError;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Lifecycle of a submission trigger.
///
/// ```text
/// Idle ──begin──▶ Submitting ──resolve──▶ Succeeded | Failed
///  ▲                                          │
///  └──────────── next trigger accepted ───────┘
/// ```
///
/// A resolved state behaves like `Idle` for the next trigger; it only
/// remembers how the previous exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_in_flight(self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

#[derive(Debug)]
struct SubmissionInner {
    state: SubmissionState,
    started_at: Option<DateTime<Utc>>,
}

/// State of one submission trigger (the single push button, the batch
/// confirm button, ...).
///
/// Cloning is cheap and every clone observes the same state, so a front end
/// can keep a handle to disable its trigger while the dispatcher holds
/// another. Single and batch triggers should each own a separate
/// `Submission`; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct Submission {
    inner: Arc<Mutex<SubmissionInner>>,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubmissionInner {
                state: SubmissionState::Idle,
                started_at: None,
            })),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    /// `true` while an exchange is outstanding; the trigger should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.state().is_in_flight()
    }

    /// When the current or most recent exchange was issued.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.lock().started_at
    }

    /// Moves to `Submitting` and returns the guard that must resolve it.
    pub(crate) fn begin(&self, operation: &'static str) -> Result<InFlight, DispatchError> {
        let mut inner = self.lock();
        if inner.state.is_in_flight() {
            log::warn!("Rejected {operation} trigger: previous submission still in flight");
            return Err(DispatchError::AlreadySubmitting);
        }

        let started_at = Utc::now();
        inner.state = SubmissionState::Submitting;
        inner.started_at = Some(started_at);

        Ok(InFlight {
            submission: self.clone(),
            id: Uuid::new_v4(),
            operation,
            started_at,
            resolved: false,
        })
    }

    fn finish(&self, state: SubmissionState) {
        self.lock().state = state;
    }

    // The guarded data is a plain enum and timestamp, always consistent, so
    // a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, SubmissionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// RAII guard for a submission in the `Submitting` state.
///
/// [`InFlight::resolve`] records the terminal state. If the guard is dropped
/// without resolving (the awaiting future was dropped), the submission is
/// marked `Failed` so the trigger is not left disabled forever.
#[derive(Debug)]
pub(crate) struct InFlight {
    submission: Submission,
    id: Uuid,
    operation: &'static str,
    started_at: DateTime<Utc>,
    resolved: bool,
}

impl InFlight {
    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    pub(crate) fn resolve(mut self, succeeded: bool) {
        let state = if succeeded {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
        self.submission.finish(state);
        self.resolved = true;

        let elapsed_ms = (Utc::now() - self.started_at).num_milliseconds();
        log::info!(
            "Submission {} ({}) resolved: succeeded={} in {}ms",
            self.id,
            self.operation,
            succeeded,
            elapsed_ms
        );
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.resolved {
            log::warn!(
                "Submission {} ({}) dropped before resolving; marking as failed",
                self.id,
                self.operation
            );
            self.submission.finish(SubmissionState::Failed);
        }
    }
}
