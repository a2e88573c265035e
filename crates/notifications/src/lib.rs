//! Notification emails for captured leads.
//!
//! - `compose`: pure HTML rendering of submitter and admin emails
//! - `mailer`: the `Mailer` dispatch trait and its error type
//! - `resend`: `Mailer` backed by the Resend HTTP API
//! - `memory`: recording `Mailer` for tests

pub mod compose;
pub mod mailer;
pub mod memory;
pub mod resend;

pub use compose::EmailMessage;
pub use mailer::{EmailError, Mailer};
pub use memory::{InMemoryMailer, SentEmail};
pub use resend::{DEFAULT_FROM, DEFAULT_RESEND_API_URL, ResendConfig, ResendMailer};
