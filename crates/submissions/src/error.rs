//! Submission error types.

use domain::ValidationError;
use lead_store::StoreError;
use thiserror::Error;

use crate::state::{SubmissionKind, SubmissionState};

/// Errors surfaced to the caller of a submission entry point.
///
/// Email failures and absorbed store failures never appear here.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The form failed validation; nothing was stored or sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record could not be stored; no email was sent.
    #[error("Failed to store {kind} submission: {source}")]
    Failed {
        kind: SubmissionKind,
        source: StoreError,
    },

    /// The orchestrator attempted a transition the state machine forbids.
    #[error("Invalid submission state transition: {from} -> {to}")]
    InvalidTransition {
        from: SubmissionState,
        to: SubmissionState,
    },
}

/// Convenience type alias for submission results.
pub type Result<T> = std::result::Result<T, SubmissionError>;
