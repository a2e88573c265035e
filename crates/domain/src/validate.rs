//! Form validation. Pure and synchronous: a payload either becomes a lead
//! entity or a `ValidationError` listing every rejected field.

use chrono::{DateTime, NaiveDate};
use common::{EmailAddress, RecordId};

use crate::error::{FieldError, ValidationError};
use crate::form::{BookDemoForm, JoinWaitlistForm};
use crate::lead::{Company, DemoRequest, PersonName, WaitlistEntry};

/// Minimum length of a demo requester's name, in UTF-16 code units.
pub const MIN_DEMO_NAME_CHARS: usize = 2;

/// Validates a "book a demo" submission.
pub fn validate_demo_request(form: BookDemoForm) -> Result<DemoRequest, ValidationError> {
    let mut errors = Vec::new();

    let name = match form.name.and_then(PersonName::new) {
        Some(name) if name.utf16_len() >= MIN_DEMO_NAME_CHARS => Some(name),
        Some(_) => {
            errors.push(FieldError::new(
                "name",
                format!("must be at least {MIN_DEMO_NAME_CHARS} characters"),
            ));
            None
        }
        None => {
            errors.push(FieldError::new("name", "is required"));
            None
        }
    };
    let email = required_email(form.email, &mut errors);
    let company = form.company.and_then(Company::new);
    let preferred_date = match form.date.filter(|d| !d.is_empty()) {
        Some(raw) => match parse_calendar_date(&raw) {
            Some(date) => Some(date),
            None => {
                errors.push(FieldError::new("date", "is not a calendar date"));
                None
            }
        },
        None => None,
    };

    match (name, email) {
        (Some(name), Some(email)) if errors.is_empty() => Ok(DemoRequest {
            id: RecordId::new(),
            name,
            email,
            company,
            preferred_date,
        }),
        _ => Err(ValidationError { fields: errors }),
    }
}

/// Validates a "join the waitlist" submission.
pub fn validate_waitlist_entry(form: JoinWaitlistForm) -> Result<WaitlistEntry, ValidationError> {
    let mut errors = Vec::new();
    let email = required_email(form.email, &mut errors);
    let name = form.name.and_then(PersonName::new);

    match email {
        Some(email) if errors.is_empty() => Ok(WaitlistEntry {
            id: RecordId::new(),
            email,
            name,
        }),
        _ => Err(ValidationError { fields: errors }),
    }
}

fn required_email(raw: Option<String>, errors: &mut Vec<FieldError>) -> Option<EmailAddress> {
    match raw.filter(|e| !e.is_empty()) {
        Some(raw) => match EmailAddress::parse(&raw) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(FieldError::new("email", "is not a valid email address"));
                None
            }
        },
        None => {
            errors.push(FieldError::new("email", "is required"));
            None
        }
    }
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its date.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
