use async_trait::async_trait;
use domain::{DemoRequest, WaitlistEntry};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::{Result, StoreError, store::LeadStore};

/// PostgreSQL-backed lead store implementation.
#[derive(Clone)]
pub struct PostgresLeadStore {
    pool: PgPool,
}

impl PostgresLeadStore {
    /// Creates a new PostgreSQL lead store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool to `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl LeadStore for PostgresLeadStore {
    #[tracing::instrument(skip_all, fields(id = %request.id))]
    async fn insert_demo_request(&self, request: &DemoRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO demo_requests (id, name, email, company, preferred_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(request.id.as_uuid())
        .bind(request.name.as_str())
        .bind(request.email.as_str())
        .bind(request.company.as_ref().map(|c| c.as_str()))
        .bind(request.preferred_date)
        .execute(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(id = %entry.id))]
    async fn insert_waitlist_entry(&self, entry: &WaitlistEntry) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO waitlist_entries (id, email, name)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.email.as_str())
        .bind(entry.name.as_ref().map(|n| n.as_str()))
        .execute(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        Ok(())
    }

    async fn count_waitlist_entries(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}
