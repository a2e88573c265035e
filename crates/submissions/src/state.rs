//! Per-request submission state machine.

use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

/// Which entry point a submission came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionKind {
    DemoRequest,
    Waitlist,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::DemoRequest => "demo_request",
            SubmissionKind::Waitlist => "waitlist",
        }
    }
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The state of a single submission.
///
/// State transitions:
/// ```text
/// Received ──► Validated ──► Stored ──► NotifiedUser ──► NotifiedAdmin ──► Complete
///    │             │
///    └► Rejected   └► Failed (demo requests only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionState {
    /// Payload received, nothing checked yet.
    #[default]
    Received,

    /// Payload passed validation.
    Validated,

    /// The store step finished (for waitlist entries, possibly absorbed).
    Stored,

    /// The submitter email step was attempted.
    NotifiedUser,

    /// The admin email step was attempted or skipped.
    NotifiedAdmin,

    /// Submission accepted (terminal state).
    Complete,

    /// Validation failed (terminal state).
    Rejected,

    /// Storing a demo request failed (terminal state).
    Failed,
}

impl SubmissionState {
    /// Returns true if `next` is a legal successor for a submission of `kind`.
    pub fn can_transition_to(&self, next: SubmissionState, kind: SubmissionKind) -> bool {
        use SubmissionState::*;
        match (self, next) {
            (Received, Validated | Rejected)
            | (Validated, Stored)
            | (Stored, NotifiedUser)
            | (NotifiedUser, NotifiedAdmin)
            | (NotifiedAdmin, Complete) => true,
            (Validated, Failed) => kind == SubmissionKind::DemoRequest,
            _ => false,
        }
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Complete | SubmissionState::Rejected | SubmissionState::Failed
        )
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Received => "Received",
            SubmissionState::Validated => "Validated",
            SubmissionState::Stored => "Stored",
            SubmissionState::NotifiedUser => "NotifiedUser",
            SubmissionState::NotifiedAdmin => "NotifiedAdmin",
            SubmissionState::Complete => "Complete",
            SubmissionState::Rejected => "Rejected",
            SubmissionState::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks one submission through its states.
#[derive(Debug, Clone)]
pub struct SubmissionProgress {
    kind: SubmissionKind,
    history: Vec<SubmissionState>,
}

impl SubmissionProgress {
    pub fn new(kind: SubmissionKind) -> Self {
        Self {
            kind,
            history: vec![SubmissionState::Received],
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    pub fn state(&self) -> SubmissionState {
        self.history
            .last()
            .copied()
            .unwrap_or(SubmissionState::Received)
    }

    /// Every state visited so far, starting with `Received`.
    pub fn history(&self) -> &[SubmissionState] {
        &self.history
    }

    /// Moves to `next`, refusing transitions the state machine doesn't allow.
    pub fn advance(&mut self, next: SubmissionState) -> Result<(), SubmissionError> {
        let current = self.state();
        if !current.can_transition_to(next, self.kind) {
            return Err(SubmissionError::InvalidTransition {
                from: current,
                to: next,
            });
        }
        tracing::debug!(kind = %self.kind, from = %current, to = %next, "submission state");
        self.history.push(next);
        Ok(())
    }

    pub fn into_history(self) -> Vec<SubmissionState> {
        self.history
    }
}
