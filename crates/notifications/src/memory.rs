//! Recording `Mailer` for tests.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::EmailAddress;

use crate::mailer::{EmailError, Mailer};

/// An email captured by [`InMemoryMailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: EmailAddress,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Default)]
struct InMemoryMailerState {
    sent: Vec<SentEmail>,
    attempts: usize,
    fail_all: bool,
    fail_recipients: HashSet<EmailAddress>,
}

/// In-memory mailer for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailer {
    state: Arc<RwLock<InMemoryMailerState>>,
}

impl InMemoryMailer {
    /// Creates a new in-memory mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every send to fail.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_all = fail;
    }

    /// Configures sends to `recipient` to fail.
    pub fn fail_sends_to(&self, recipient: &EmailAddress) {
        self.state
            .write()
            .unwrap()
            .fail_recipients
            .insert(recipient.clone());
    }

    /// Returns every successfully sent email, in order.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.state.read().unwrap().sent.clone()
    }

    /// Returns the emails successfully sent to `recipient`.
    pub fn sent_to(&self, recipient: &EmailAddress) -> Vec<SentEmail> {
        self.state
            .read()
            .unwrap()
            .sent
            .iter()
            .filter(|e| &e.to == recipient)
            .cloned()
            .collect()
    }

    /// Returns the number of send calls, successful or not.
    pub fn attempt_count(&self) -> usize {
        self.state.read().unwrap().attempts
    }
}

#[async_trait]
impl Mailer for InMemoryMailer {
    async fn send(&self, to: &EmailAddress, subject: &str, html: &str) -> Result<(), EmailError> {
        let mut state = self.state.write().unwrap();
        state.attempts += 1;

        if state.fail_all || state.fail_recipients.contains(to) {
            return Err(EmailError::Unavailable("Simulated send failure".to_string()));
        }

        state.sent.push(SentEmail {
            to: to.clone(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
