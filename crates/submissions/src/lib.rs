//! Submission orchestration for the two lead-capture entry points.
//!
//! Each submission runs the same sequence:
//! 1. Validate the form
//! 2. Store the record
//! 3. Email the submitter
//! 4. Email the administrator (when one is configured)
//!
//! Only validation failures, and store failures on the demo-request path,
//! reach the caller as errors. Every other failure is logged and absorbed.

pub mod error;
pub mod receipt;
pub mod service;
pub mod state;

pub use error::{Result, SubmissionError};
pub use receipt::{NotificationOutcome, StoreOutcome, SubmissionReceipt};
pub use service::SubmissionService;
pub use state::{SubmissionKind, SubmissionProgress, SubmissionState};
