//! Record store gateway for captured leads.
//!
//! Two append-only collections: `demo_requests` and `waitlist_entries`
//! (unique on email). The gateway never retries; callers decide which
//! failures to absorb.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryLeadStore;
pub use postgres::PostgresLeadStore;
pub use store::LeadStore;
