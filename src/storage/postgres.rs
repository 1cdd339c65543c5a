//! PostgreSQL submission store
//!
//! Ids come from the `contact_submissions.id` SERIAL sequence and
//! `created_at` from the column default, so both are assigned inside the
//! same atomic INSERT.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use super::errors::StorageResult;
use super::SubmissionStore;
use crate::contact::{ContactSubmission, NewContactSubmission};

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Connect and verify the database is reachable
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let pool = Self::pool_options().connect(database_url).await?;
        info!(max_connections = MAX_CONNECTIONS, "connected to postgres");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded migrations in `migrations/`
    pub async fn migrate(&self) -> StorageResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("database migrations applied");
        Ok(())
    }

    fn pool_options() -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
    }
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    async fn insert(&self, submission: NewContactSubmission) -> StorageResult<ContactSubmission> {
        let row = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (
                name,
                phone,
                email,
                service_type,
                message
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id,
                name,
                phone,
                email,
                service_type,
                message,
                created_at
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.phone)
        .bind(&submission.email)
        .bind(&submission.service_type)
        .bind(&submission.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
