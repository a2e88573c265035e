//! Form payloads exactly as a client submits them.
//!
//! Every field is optional text so that a missing or empty field reaches the
//! validator and is reported there, instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Raw "book a demo" submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDemoForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    /// Preferred date, either `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: Option<String>,
}

impl BookDemoForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Raw "join the waitlist" submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinWaitlistForm {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl JoinWaitlistForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
