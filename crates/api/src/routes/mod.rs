//! HTTP route handlers.

pub mod health;
pub mod leads;
pub mod metrics;
