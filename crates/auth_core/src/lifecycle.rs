//! Submission lifecycle: the state machine governing one screen's
//! asynchronous authentication attempt.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Phase of the submission attempt. Owned exclusively by one controller
/// instance; never shared across screens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", content = "reason", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// At most one attempt is in flight per instance; `begin` is the guard.
#[derive(Debug, Default)]
pub struct SubmissionLifecycle {
    state: SubmissionState,
}

impl SubmissionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.is_submitting()
    }

    /// Enters `Submitting`. Returns `false` without transitioning while an
    /// attempt is already in flight; `Idle`, `Succeeded`, and `Failed` all
    /// accept a fresh attempt.
    pub fn begin(&mut self) -> bool {
        if self.state.is_submitting() {
            return false;
        }
        self.state = SubmissionState::Submitting;
        true
    }

    /// Records the collaborator resolving successfully. Terminal for this
    /// attempt.
    pub fn resolve_success(&mut self) {
        if !self.state.is_submitting() {
            warn!(state = ?self.state, "ignoring success resolution outside Submitting");
            return;
        }
        self.state = SubmissionState::Succeeded;
    }

    /// Records the collaborator rejecting. A later `begin` retries.
    pub fn resolve_failure(&mut self, reason: impl Into<String>) {
        if !self.state.is_submitting() {
            warn!(state = ?self.state, "ignoring failure resolution outside Submitting");
            return;
        }
        self.state = SubmissionState::Failed(reason.into());
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
