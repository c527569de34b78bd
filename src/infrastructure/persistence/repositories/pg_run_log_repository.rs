use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, RunLogRepository};
use crate::domain::RunLogEntry;

pub struct PgRunLogRepository {
    pool: PgPool,
}

impl PgRunLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunLogRepository for PgRunLogRepository {
    #[instrument(skip(self, entry), fields(job_type = %entry.job_type, status = %entry.status))]
    async fn insert(&self, entry: &RunLogEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO logs (id, type, text, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.job_type)
        .bind(&entry.description)
        .bind(entry.start_time)
        .bind(entry.end_time)
        .bind(entry.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
