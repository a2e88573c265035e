//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container and truncate the lead
//! tables before each test, so they are serialized.
//! Run with:
//!
//! ```bash
//! cargo test -p lead-store --test postgres_integration
//! ```

use std::sync::Arc;

use domain::{
    BookDemoForm, JoinWaitlistForm, WaitlistEntry, validate_demo_request, validate_waitlist_entry,
};
use lead_store::{LeadStore, PostgresLeadStore, StoreError};
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            let store = PostgresLeadStore::connect(&connection_string, 1)
                .await
                .unwrap();
            store.run_migrations().await.unwrap();
            store.pool().close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and cleared tables
async fn get_test_store() -> PostgresLeadStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE demo_requests, waitlist_entries")
        .execute(&pool)
        .await
        .unwrap();

    PostgresLeadStore::new(pool)
}

fn waitlist_entry(email: &str) -> WaitlistEntry {
    validate_waitlist_entry(JoinWaitlistForm::new(email)).unwrap()
}

async fn demo_row_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM demo_requests")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[serial]
async fn insert_demo_request_with_optional_fields() {
    let store = get_test_store().await;
    let request = validate_demo_request(
        BookDemoForm::new("Ada Lovelace", "ada@example.com")
            .with_company("Analytical Engines")
            .with_date("2026-11-03"),
    )
    .unwrap();

    store.insert_demo_request(&request).await.unwrap();

    let (company, date): (Option<String>, Option<chrono::NaiveDate>) =
        sqlx::query_as("SELECT company, preferred_date FROM demo_requests WHERE id = $1")
            .bind(request.id.as_uuid())
            .fetch_one(store.pool())
            .await
            .unwrap();
    assert_eq!(company.as_deref(), Some("Analytical Engines"));
    assert_eq!(date, request.preferred_date);
}

#[tokio::test]
#[serial]
async fn insert_demo_request_without_optional_fields() {
    let store = get_test_store().await;
    let request = validate_demo_request(BookDemoForm::new("Ada", "ada@example.com")).unwrap();

    store.insert_demo_request(&request).await.unwrap();

    assert_eq!(demo_row_count(store.pool()).await, 1);
}

#[tokio::test]
#[serial]
async fn count_waitlist_entries_is_exact() {
    let store = get_test_store().await;
    assert_eq!(store.count_waitlist_entries().await.unwrap(), 0);

    for email in ["a@x.com", "b@x.com", "c@x.com"] {
        store
            .insert_waitlist_entry(&waitlist_entry(email))
            .await
            .unwrap();
    }

    assert_eq!(store.count_waitlist_entries().await.unwrap(), 3);
}

#[tokio::test]
#[serial]
async fn duplicate_waitlist_email_maps_to_duplicate() {
    let store = get_test_store().await;
    store
        .insert_waitlist_entry(&waitlist_entry("a@x.com"))
        .await
        .unwrap();

    let err = store
        .insert_waitlist_entry(&waitlist_entry("a@x.com"))
        .await
        .unwrap_err();

    match err {
        StoreError::Duplicate { constraint } => {
            assert_eq!(constraint.as_deref(), Some("waitlist_entries_email_key"));
        }
        other => panic!("expected duplicate, got {other:?}"),
    }
    assert_eq!(store.count_waitlist_entries().await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn closed_pool_reports_database_error() {
    let store = get_test_store().await;
    store.pool().close().await;

    let err = store
        .insert_waitlist_entry(&waitlist_entry("a@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Database(_)));
    assert!(store.count_waitlist_entries().await.is_err());
}

#[tokio::test]
#[serial]
async fn concurrent_waitlist_inserts_for_same_email_keep_one_row() {
    let store = get_test_store().await;
    let first = waitlist_entry("race@x.com");
    let second = waitlist_entry("race@x.com");

    let (a, b) = tokio::join!(
        store.insert_waitlist_entry(&first),
        store.insert_waitlist_entry(&second)
    );

    let results = [a, b];
    let inserted = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(e) if e.is_duplicate()))
        .count();
    assert_eq!(inserted, 1);
    assert_eq!(duplicates, 1);
    assert_eq!(store.count_waitlist_entries().await.unwrap(), 1);
}
