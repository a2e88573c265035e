//! Notification composer.
//!
//! Pure functions from validated lead data to rendered emails. Optional
//! fields that are absent leave out their whole section. All submitted text
//! is HTML-escaped by `maud`.

use chrono::{Datelike, NaiveDate};
use domain::{DemoRequest, WaitlistEntry};
use maud::{Markup, html};

/// Product name used in subjects and bodies.
pub const PRODUCT_NAME: &str = "AIODEV";

/// A rendered email, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    fn new(subject: String, body: Markup) -> Self {
        Self {
            subject,
            html: body.into_string(),
        }
    }
}

/// Confirmation sent to the person who requested a demo.
pub fn demo_request_user(request: &DemoRequest) -> EmailMessage {
    let body = html! {
        div {
            h1 { "Your Demo Request is Confirmed" }
            p { "Hi " (request.name.as_str()) "," }
            p {
                "Thank you for requesting a demo of " (PRODUCT_NAME) ". We've received your request \
                 and our team will be in touch shortly to schedule your personalized demo."
            }
            @if let Some(date) = request.preferred_date {
                p { "Your preferred date: " strong { (long_date(date)) } }
            }
            p { "If you have any questions in the meantime, please reply to this email." }
            (signature())
        }
    };
    EmailMessage::new(format!("Your {PRODUCT_NAME} Demo Request"), body)
}

/// Admin notification for a new demo request.
pub fn demo_request_admin(request: &DemoRequest) -> EmailMessage {
    let body = html! {
        div {
            h1 { "New Demo Request" }
            p { "A new demo request has been submitted:" }
            ul {
                li { strong { "Name:" } " " (request.name.as_str()) }
                li { strong { "Email:" } " " (request.email.as_str()) }
                @if let Some(company) = &request.company {
                    li { strong { "Company:" } " " (company.as_str()) }
                }
                @if let Some(date) = request.preferred_date {
                    li { strong { "Preferred Date:" } " " (long_date(date)) }
                }
            }
            p { "Please follow up with this lead as soon as possible." }
        }
    };
    EmailMessage::new(format!("New {PRODUCT_NAME} Demo Request"), body)
}

/// Welcome email sent to a new waitlist member.
pub fn waitlist_user(entry: &WaitlistEntry) -> EmailMessage {
    let greeting = entry.name.as_ref().map_or("there", |n| n.as_str());
    let body = html! {
        div {
            h1 { "Welcome to the " (PRODUCT_NAME) " Waitlist!" }
            p { "Hi " (greeting) "," }
            p {
                "Thank you for joining the " (PRODUCT_NAME) " waitlist. \
                 We're excited to have you on board!"
            }
            p {
                "We'll notify you at " strong { (entry.email.as_str()) } " as soon as we're ready \
                 to launch and you'll be among the first to get access."
            }
            p { "In the meantime, stay tuned for updates and sneak peeks of what we're building." }
            (signature())
        }
    };
    EmailMessage::new(format!("Welcome to the {PRODUCT_NAME} Waitlist"), body)
}

/// Admin notification for a new waitlist signup, with the current size of
/// the waitlist.
pub fn waitlist_admin(entry: &WaitlistEntry, waitlist_count: u64) -> EmailMessage {
    let body = html! {
        div {
            h1 { "New Waitlist Signup" }
            p { "A new user has joined the waitlist:" }
            ul {
                li { strong { "Email:" } " " (entry.email.as_str()) }
                @if let Some(name) = &entry.name {
                    li { strong { "Name:" } " " (name.as_str()) }
                }
            }
            p { "The waitlist is growing! Current count: " (waitlist_count) }
        }
    };
    EmailMessage::new(format!("New {PRODUCT_NAME} Waitlist Signup"), body)
}

fn signature() -> Markup {
    html! {
        p { "Best regards," br; "The " (PRODUCT_NAME) " Team" }
    }
}

/// Long human date, e.g. "Saturday, October 17th, 2026".
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!(
        "{}, {} {day}{suffix}, {}",
        date.format("%A"),
        date.format("%B"),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{BookDemoForm, JoinWaitlistForm, validate_demo_request, validate_waitlist_entry};

    fn demo(form: BookDemoForm) -> DemoRequest {
        validate_demo_request(form).unwrap()
    }

    fn waitlist(form: JoinWaitlistForm) -> WaitlistEntry {
        validate_waitlist_entry(form).unwrap()
    }

    #[test]
    fn long_date_ordinals() {
        let d = |day| NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
        assert_eq!(long_date(d(17)), "Saturday, October 17th, 2026");
        assert_eq!(long_date(d(1)), "Thursday, October 1st, 2026");
        assert_eq!(long_date(d(2)), "Friday, October 2nd, 2026");
        assert_eq!(long_date(d(3)), "Saturday, October 3rd, 2026");
        assert_eq!(long_date(d(11)), "Sunday, October 11th, 2026");
        assert_eq!(long_date(d(12)), "Monday, October 12th, 2026");
        assert_eq!(long_date(d(13)), "Tuesday, October 13th, 2026");
        assert_eq!(long_date(d(21)), "Wednesday, October 21st, 2026");
        assert_eq!(long_date(d(22)), "Thursday, October 22nd, 2026");
        assert_eq!(long_date(d(31)), "Saturday, October 31st, 2026");
    }

    #[test]
    fn demo_user_email_with_date() {
        let msg = demo_request_user(&demo(
            BookDemoForm::new("Ada", "ada@example.com").with_date("2026-11-03"),
        ));
        assert_eq!(msg.subject, "Your AIODEV Demo Request");
        assert!(msg.html.contains("Hi Ada,"));
        assert!(msg.html.contains("Your preferred date: <strong>Tuesday, November 3rd, 2026</strong>"));
    }

    #[test]
    fn demo_user_email_without_date_omits_section() {
        let msg = demo_request_user(&demo(BookDemoForm::new("Ada", "ada@example.com")));
        assert!(!msg.html.contains("preferred date"));
    }

    #[test]
    fn demo_admin_email_lists_present_fields_only() {
        let full = demo_request_admin(&demo(
            BookDemoForm::new("Ada", "ada@example.com")
                .with_company("Analytical Engines")
                .with_date("2026-11-03"),
        ));
        assert_eq!(full.subject, "New AIODEV Demo Request");
        assert!(full.html.contains("<strong>Name:</strong> Ada"));
        assert!(full.html.contains("<strong>Email:</strong> ada@example.com"));
        assert!(full.html.contains("<strong>Company:</strong> Analytical Engines"));
        assert!(full.html.contains("<strong>Preferred Date:</strong> Tuesday, November 3rd, 2026"));

        let bare = demo_request_admin(&demo(BookDemoForm::new("Ada", "ada@example.com")));
        assert!(!bare.html.contains("Company:"));
        assert!(!bare.html.contains("Preferred Date:"));
    }

    #[test]
    fn submitted_text_is_escaped() {
        let msg = demo_request_admin(&demo(
            BookDemoForm::new("<script>x</script>", "ada@example.com").with_company("A & B"),
        ));
        assert!(!msg.html.contains("<script>"));
        assert!(msg.html.contains("&lt;script&gt;"));
        assert!(msg.html.contains("A &amp; B"));
    }

    #[test]
    fn waitlist_user_email_greets_by_name_or_there() {
        let named = waitlist_user(&waitlist(JoinWaitlistForm::new("a@x.com").with_name("Grace")));
        assert_eq!(named.subject, "Welcome to the AIODEV Waitlist");
        assert!(named.html.contains("Hi Grace,"));
        assert!(named.html.contains("<strong>a@x.com</strong>"));

        let anonymous = waitlist_user(&waitlist(JoinWaitlistForm::new("a@x.com")));
        assert!(anonymous.html.contains("Hi there,"));
    }

    #[test]
    fn waitlist_admin_email_includes_count() {
        let msg = waitlist_admin(&waitlist(JoinWaitlistForm::new("a@x.com").with_name("A")), 1);
        assert_eq!(msg.subject, "New AIODEV Waitlist Signup");
        assert!(msg.html.contains("Current count: 1"));
        assert!(msg.html.contains("<strong>Name:</strong> A"));

        let no_name = waitlist_admin(&waitlist(JoinWaitlistForm::new("a@x.com")), 7);
        assert!(!no_name.html.contains("Name:"));
        assert!(no_name.html.contains("Current count: 7"));
    }
}
