//! Submission orchestrator for demo requests and waitlist signups.

use std::time::Instant;

use common::EmailAddress;
use domain::{BookDemoForm, JoinWaitlistForm, validate_demo_request, validate_waitlist_entry};
use lead_store::LeadStore;
use notifications::{EmailError, EmailMessage, Mailer, compose};

use crate::error::{Result, SubmissionError};
use crate::receipt::{NotificationOutcome, StoreOutcome, SubmissionReceipt};
use crate::state::{SubmissionKind, SubmissionProgress, SubmissionState};

#[derive(Debug, Clone, Copy)]
enum Recipient {
    User,
    Admin,
}

impl Recipient {
    fn as_str(&self) -> &'static str {
        match self {
            Recipient::User => "user",
            Recipient::Admin => "admin",
        }
    }
}

/// Sequences validate → store → notify user → notify admin for each
/// submission.
///
/// Holds no per-request state; concurrent submissions share nothing but the
/// store and mailer handles.
pub struct SubmissionService<S, M>
where
    S: LeadStore,
    M: Mailer,
{
    store: S,
    mailer: M,
    admin_email: Option<EmailAddress>,
}

impl<S, M> SubmissionService<S, M>
where
    S: LeadStore,
    M: Mailer,
{
    /// Creates a new submission service.
    ///
    /// With no `admin_email`, admin notifications are skipped.
    pub fn new(store: S, mailer: M, admin_email: Option<EmailAddress>) -> Self {
        Self {
            store,
            mailer,
            admin_email,
        }
    }

    /// Handles a "book a demo" submission.
    ///
    /// Fails on invalid input or when the request cannot be stored. Email
    /// failures are logged and never fail the submission.
    #[tracing::instrument(skip_all, fields(kind = "demo_request"))]
    pub async fn book_demo(&self, form: BookDemoForm) -> Result<SubmissionReceipt> {
        let started = Instant::now();
        let mut progress = SubmissionProgress::new(SubmissionKind::DemoRequest);

        let request = match validate_demo_request(form) {
            Ok(request) => request,
            Err(e) => return self.reject(progress, e),
        };
        progress.advance(SubmissionState::Validated)?;

        if let Err(e) = self.store.insert_demo_request(&request).await {
            progress.advance(SubmissionState::Failed)?;
            tracing::error!(error = %e, id = %request.id, "failed to store demo request");
            record_outcome(SubmissionKind::DemoRequest, "failed", started);
            return Err(SubmissionError::Failed {
                kind: SubmissionKind::DemoRequest,
                source: e,
            });
        }
        progress.advance(SubmissionState::Stored)?;

        let user_notification = self
            .notify(
                Recipient::User,
                &request.email,
                compose::demo_request_user(&request),
            )
            .await;
        progress.advance(SubmissionState::NotifiedUser)?;

        let admin_notification = match &self.admin_email {
            Some(admin) => {
                self.notify(Recipient::Admin, admin, compose::demo_request_admin(&request))
                    .await
            }
            None => NotificationOutcome::Skipped,
        };
        progress.advance(SubmissionState::NotifiedAdmin)?;

        self.complete(
            progress,
            StoreOutcome::Inserted,
            user_notification,
            admin_notification,
            started,
        )
    }

    /// Handles a "join the waitlist" submission.
    ///
    /// Fails only on invalid input. A duplicate address counts as already
    /// satisfied; any other store failure is logged and the emails are still
    /// sent.
    #[tracing::instrument(skip_all, fields(kind = "waitlist"))]
    pub async fn join_waitlist(&self, form: JoinWaitlistForm) -> Result<SubmissionReceipt> {
        let started = Instant::now();
        let mut progress = SubmissionProgress::new(SubmissionKind::Waitlist);

        let entry = match validate_waitlist_entry(form) {
            Ok(entry) => entry,
            Err(e) => return self.reject(progress, e),
        };
        progress.advance(SubmissionState::Validated)?;

        let stored = match self.store.insert_waitlist_entry(&entry).await {
            Ok(()) => StoreOutcome::Inserted,
            Err(e) if e.is_duplicate() => {
                tracing::info!(email = %entry.email, "address already on waitlist");
                StoreOutcome::AlreadyPresent
            }
            Err(e) => {
                tracing::error!(error = %e, id = %entry.id, "failed to store waitlist entry, continuing");
                metrics::counter!("store_errors_absorbed_total", "kind" => SubmissionKind::Waitlist.as_str())
                    .increment(1);
                StoreOutcome::Absorbed
            }
        };
        progress.advance(SubmissionState::Stored)?;

        let user_notification = self
            .notify(Recipient::User, &entry.email, compose::waitlist_user(&entry))
            .await;
        progress.advance(SubmissionState::NotifiedUser)?;

        let admin_notification = match &self.admin_email {
            Some(admin) => {
                let count = self.waitlist_count().await;
                self.notify(Recipient::Admin, admin, compose::waitlist_admin(&entry, count))
                    .await
            }
            None => NotificationOutcome::Skipped,
        };
        progress.advance(SubmissionState::NotifiedAdmin)?;

        self.complete(
            progress,
            stored,
            user_notification,
            admin_notification,
            started,
        )
    }

    /// Current number of waitlist entries, or 0 if the store can't be read.
    #[tracing::instrument(skip(self))]
    pub async fn waitlist_count(&self) -> u64 {
        match self.store.count_waitlist_entries().await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, "failed to count waitlist entries");
                0
            }
        }
    }

    fn reject(
        &self,
        mut progress: SubmissionProgress,
        err: domain::ValidationError,
    ) -> Result<SubmissionReceipt> {
        progress.advance(SubmissionState::Rejected)?;
        tracing::info!(error = %err, "submission rejected");
        metrics::counter!(
            "submissions_total",
            "kind" => progress.kind().as_str(),
            "outcome" => "rejected"
        )
        .increment(1);
        Err(SubmissionError::Validation(err))
    }

    fn complete(
        &self,
        mut progress: SubmissionProgress,
        stored: StoreOutcome,
        user_notification: NotificationOutcome,
        admin_notification: NotificationOutcome,
        started: Instant,
    ) -> Result<SubmissionReceipt> {
        progress.advance(SubmissionState::Complete)?;
        let kind = progress.kind();
        record_outcome(kind, "complete", started);
        tracing::info!(
            ?stored,
            ?user_notification,
            ?admin_notification,
            "submission complete"
        );

        Ok(SubmissionReceipt {
            success: true,
            kind,
            stored,
            user_notification,
            admin_notification,
            history: progress.into_history(),
        })
    }

    async fn notify(
        &self,
        recipient: Recipient,
        to: &EmailAddress,
        message: EmailMessage,
    ) -> NotificationOutcome {
        match self.mailer.send(to, &message.subject, &message.html).await {
            Ok(()) => {
                metrics::counter!("emails_sent_total", "recipient" => recipient.as_str())
                    .increment(1);
                NotificationOutcome::Sent
            }
            Err(e) => {
                match &e {
                    EmailError::Configuration(_) => {
                        tracing::error!(recipient = recipient.as_str(), error = %e, "email dispatch misconfigured")
                    }
                    _ => tracing::warn!(recipient = recipient.as_str(), error = %e, "email dispatch failed"),
                }
                metrics::counter!("emails_failed_total", "recipient" => recipient.as_str())
                    .increment(1);
                NotificationOutcome::Failed
            }
        }
    }
}

fn record_outcome(kind: SubmissionKind, outcome: &'static str, started: Instant) {
    metrics::counter!("submissions_total", "kind" => kind.as_str(), "outcome" => outcome)
        .increment(1);
    metrics::histogram!("submission_duration_seconds", "kind" => kind.as_str())
        .record(started.elapsed().as_secs_f64());
}
