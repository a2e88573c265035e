use std::sync::Arc;

use async_trait::async_trait;
use domain::{DemoRequest, WaitlistEntry};
use tokio::sync::RwLock;

use crate::{Result, StoreError, store::LeadStore};

#[derive(Debug, Default)]
struct InMemoryState {
    demo_requests: Vec<DemoRequest>,
    waitlist_entries: Vec<WaitlistEntry>,
    fail_inserts: bool,
    fail_counts: bool,
}

/// In-memory lead store implementation for testing.
///
/// Enforces the same email uniqueness on waitlist entries as the
/// PostgreSQL schema, and can simulate an outage for inserts and count
/// queries independently.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryLeadStore {
    /// Creates a new empty in-memory lead store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent insert fail with `StoreError::Unavailable`.
    pub async fn set_fail_on_insert(&self, fail: bool) {
        self.state.write().await.fail_inserts = fail;
    }

    /// Makes every subsequent count query fail with `StoreError::Unavailable`.
    pub async fn set_fail_on_count(&self, fail: bool) {
        self.state.write().await.fail_counts = fail;
    }

    /// Simulates a full outage (or recovery) of the store.
    pub async fn set_unavailable(&self, unavailable: bool) {
        let mut state = self.state.write().await;
        state.fail_inserts = unavailable;
        state.fail_counts = unavailable;
    }

    /// Returns a copy of the stored demo requests.
    pub async fn demo_requests(&self) -> Vec<DemoRequest> {
        self.state.read().await.demo_requests.clone()
    }

    /// Returns a copy of the stored waitlist entries.
    pub async fn waitlist_entries(&self) -> Vec<WaitlistEntry> {
        self.state.read().await.waitlist_entries.clone()
    }

    /// Clears all rows and failure switches.
    pub async fn clear(&self) {
        *self.state.write().await = InMemoryState::default();
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn insert_demo_request(&self, request: &DemoRequest) -> Result<()> {
        let mut state = self.state.write().await;
        if state.fail_inserts {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        state.demo_requests.push(request.clone());
        Ok(())
    }

    async fn insert_waitlist_entry(&self, entry: &WaitlistEntry) -> Result<()> {
        let mut state = self.state.write().await;
        if state.fail_inserts {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        if state.waitlist_entries.iter().any(|e| e.email == entry.email) {
            return Err(StoreError::Duplicate {
                constraint: Some("waitlist_entries_email_key".to_string()),
            });
        }
        state.waitlist_entries.push(entry.clone());
        Ok(())
    }

    async fn count_waitlist_entries(&self) -> Result<u64> {
        let state = self.state.read().await;
        if state.fail_counts {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(state.waitlist_entries.len() as u64)
    }
}
