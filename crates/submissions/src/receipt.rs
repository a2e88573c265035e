//! What a completed submission reports back.

use serde::Serialize;

use crate::state::{SubmissionKind, SubmissionState};

/// How the store step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoreOutcome {
    /// A new row was written.
    Inserted,
    /// The waitlist already held this address.
    AlreadyPresent,
    /// The insert failed and the failure was logged and absorbed.
    Absorbed,
}

/// How one notification step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationOutcome {
    Sent,
    /// Dispatch failed; logged only.
    Failed,
    /// Not attempted (no admin address configured).
    Skipped,
}

/// Result of a submission that reached `Complete`.
///
/// `success` is always true; the remaining fields describe which best-effort
/// steps actually went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub kind: SubmissionKind,
    pub stored: StoreOutcome,
    pub user_notification: NotificationOutcome,
    pub admin_notification: NotificationOutcome,
    pub history: Vec<SubmissionState>,
}
