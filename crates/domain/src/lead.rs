//! Lead entities and their value objects.

use chrono::NaiveDate;
use common::{EmailAddress, RecordId};
use serde::{Deserialize, Serialize};

/// A submitter's name, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Wraps a name, returning `None` for empty text.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self(name))
    }

    /// Length in UTF-16 code units, the way a browser form measures it.
    ///
    /// Characters outside the Basic Multilingual Plane count as two.
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A company name, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Company(String);

impl Company {
    /// Wraps a company name, returning `None` for empty text.
    pub fn new(company: impl Into<String>) -> Option<Self> {
        let company = company.into();
        (!company.is_empty()).then_some(Self(company))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request for a live product walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRequest {
    pub id: RecordId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub company: Option<Company>,
    pub preferred_date: Option<NaiveDate>,
}

/// One party's interest in future product access.
///
/// Unique by `email` within the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub id: RecordId,
    pub email: EmailAddress,
    pub name: Option<PersonName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_absent() {
        assert!(PersonName::new("").is_none());
        assert!(Company::new("").is_none());
        assert_eq!(Company::new("Acme").unwrap().as_str(), "Acme");
    }

    #[test]
    fn utf16_len_counts_code_units() {
        let name = PersonName::new("Zoë").unwrap();
        assert_eq!(name.utf16_len(), 3);
        assert_eq!(name.as_str().len(), 4);

        let emoji = PersonName::new("😀").unwrap();
        assert_eq!(emoji.utf16_len(), 2);
    }
}
