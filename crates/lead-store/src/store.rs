use async_trait::async_trait;
use domain::{DemoRequest, WaitlistEntry};

use crate::Result;

/// Core trait for lead store implementations.
///
/// Inserts are fire-and-check: each is a single attempt and the outcome is
/// returned as-is. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Inserts a demo request row.
    async fn insert_demo_request(&self, request: &DemoRequest) -> Result<()>;

    /// Inserts a waitlist entry row.
    ///
    /// Fails with `StoreError::Duplicate` when an entry with the same email
    /// already exists.
    async fn insert_waitlist_entry(&self, entry: &WaitlistEntry) -> Result<()>;

    /// Counts the waitlist entries currently stored. Always a fresh read.
    async fn count_waitlist_entries(&self) -> Result<u64>;
}
