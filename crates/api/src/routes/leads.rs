//! Lead-capture endpoints: book a demo, join the waitlist, waitlist size.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use domain::{BookDemoForm, JoinWaitlistForm};
use lead_store::LeadStore;
use notifications::Mailer;
use serde::Serialize;
use submissions::SubmissionService;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: LeadStore, M: Mailer> {
    pub submissions: SubmissionService<S, M>,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct WaitlistCountResponse {
    pub count: u64,
}

// -- Handlers --

/// POST /demo-requests — book a demo.
#[tracing::instrument(skip_all)]
pub async fn book_demo<S, M>(
    State(state): State<Arc<AppState<S, M>>>,
    payload: Result<Json<BookDemoForm>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError>
where
    S: LeadStore + 'static,
    M: Mailer + 'static,
{
    let Json(form) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let receipt = state.submissions.book_demo(form).await?;

    Ok(Json(SubmissionResponse {
        success: receipt.success,
    }))
}

/// POST /waitlist — join the waitlist.
#[tracing::instrument(skip_all)]
pub async fn join_waitlist<S, M>(
    State(state): State<Arc<AppState<S, M>>>,
    payload: Result<Json<JoinWaitlistForm>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiError>
where
    S: LeadStore + 'static,
    M: Mailer + 'static,
{
    let Json(form) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let receipt = state.submissions.join_waitlist(form).await?;

    Ok(Json(SubmissionResponse {
        success: receipt.success,
    }))
}

/// GET /waitlist/count — current waitlist size, 0 if the store is unreachable.
#[tracing::instrument(skip_all)]
pub async fn waitlist_count<S, M>(
    State(state): State<Arc<AppState<S, M>>>,
) -> Json<WaitlistCountResponse>
where
    S: LeadStore + 'static,
    M: Mailer + 'static,
{
    Json(WaitlistCountResponse {
        count: state.submissions.waitlist_count().await,
    })
}
