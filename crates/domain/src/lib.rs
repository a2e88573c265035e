//! Domain layer for the lead-capture service.
//!
//! This crate provides:
//! - Lead entities (`DemoRequest`, `WaitlistEntry`) and their value objects
//! - Loosely typed form payloads as submitted by a browser
//! - The validator turning payloads into entities, or a `ValidationError`

pub mod error;
pub mod form;
pub mod lead;
pub mod validate;

pub use common::{EmailAddress, RecordId};
pub use error::{FieldError, ValidationError};
pub use form::{BookDemoForm, JoinWaitlistForm};
pub use lead::{Company, DemoRequest, PersonName, WaitlistEntry};
pub use validate::{validate_demo_request, validate_waitlist_entry};
