//! Email dispatch trait and error type.

use async_trait::async_trait;
use common::EmailAddress;
use thiserror::Error;

/// Errors that can occur when dispatching an email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// The provider credential (or other required setting) is missing.
    #[error("Email configuration error: {0}")]
    Configuration(String),

    /// The request to the provider could not be completed.
    #[error("Email transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Email rejected by provider ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The provider is unavailable.
    #[error("Email provider unavailable: {0}")]
    Unavailable(String),
}

/// Sends a single HTML email.
///
/// Each call is independent: no batching, no retry, and no delivery receipt
/// is awaited beyond the provider accepting the message.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &EmailAddress, subject: &str, html: &str) -> Result<(), EmailError>;
}
