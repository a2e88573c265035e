//! HTTP API server for the lead-capture service.
//!
//! Exposes the "book a demo" and "join the waitlist" submissions plus the
//! waitlist size, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use common::EmailAddress;
use lead_store::LeadStore;
use metrics_exporter_prometheus::PrometheusHandle;
use notifications::Mailer;
use submissions::SubmissionService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::leads::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, M>(state: Arc<AppState<S, M>>, metrics_handle: PrometheusHandle) -> Router
where
    S: LeadStore + 'static,
    M: Mailer + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/demo-requests", post(routes::leads::book_demo::<S, M>))
        .route("/waitlist", post(routes::leads::join_waitlist::<S, M>))
        .route("/waitlist/count", get(routes::leads::waitlist_count::<S, M>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a store and a mailer.
pub fn create_state<S, M>(store: S, mailer: M, admin_email: Option<EmailAddress>) -> Arc<AppState<S, M>>
where
    S: LeadStore,
    M: Mailer,
{
    if admin_email.is_none() {
        tracing::warn!("no admin address configured, admin notifications are disabled");
    }

    Arc::new(AppState {
        submissions: SubmissionService::new(store, mailer, admin_email),
    })
}
