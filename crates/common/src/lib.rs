//! Shared value types used across the lead-capture crates.

pub mod email;
pub mod types;

pub use email::{EmailAddress, InvalidEmail};
pub use types::RecordId;
