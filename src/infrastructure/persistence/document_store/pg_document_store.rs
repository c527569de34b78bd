use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{
    BulkWriteReport, DocumentStore, PendingUpdate, RepositoryError, WriteFailure,
};
use crate::domain::{DocumentId, PathRecord};

/// `files` table adapter. A record is unprocessed while `normalized_text`
/// is NULL.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self), fields(after = ?after.map(|id| id.as_uuid())))]
    async fn fetch_unprocessed(
        &self,
        after: Option<DocumentId>,
        limit: usize,
    ) -> Result<Vec<PathRecord>, RepositoryError> {
        let rows: Vec<(Uuid, String)> = sqlx::query_as(
            r#"
            SELECT id, path
            FROM files
            WHERE path IS NOT NULL
              AND normalized_text IS NULL
              AND ($1::uuid IS NULL OR id > $1)
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(after.map(|id| id.as_uuid()))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, path)| PathRecord {
                id: DocumentId::from_uuid(id),
                path,
            })
            .collect())
    }

    /// Sends the whole batch as one statement. If the database rejects it,
    /// the rows are retried one by one so a single bad row does not block
    /// the rest; those rejections come back as `WriteFailure`s.
    #[instrument(skip(self, updates), fields(batch_size = updates.len()))]
    async fn bulk_update(
        &self,
        updates: &[PendingUpdate],
    ) -> Result<BulkWriteReport, RepositoryError> {
        if updates.is_empty() {
            return Ok(BulkWriteReport::default());
        }

        let mut conn = self.pool.acquire().await.map_err(connection_error)?;

        let (ids, owners, lemmas) = flatten(updates);
        let result = sqlx::query(
            r#"
            WITH batch AS (
                SELECT id FROM UNNEST($1::uuid[]) AS b(id)
            ),
            grouped AS (
                SELECT id, array_agg(lemma ORDER BY ord) AS lemmas
                FROM UNNEST($2::uuid[], $3::text[]) WITH ORDINALITY AS l(id, lemma, ord)
                GROUP BY id
            )
            UPDATE files f
            SET normalized_text = COALESCE(grouped.lemmas, ARRAY[]::text[])
            FROM batch
            LEFT JOIN grouped ON grouped.id = batch.id
            WHERE f.id = batch.id AND f.normalized_text IS NULL
            "#,
        )
        .bind(ids)
        .bind(owners)
        .bind(lemmas)
        .execute(&mut *conn)
        .await;

        match result {
            Ok(done) => Ok(BulkWriteReport {
                modified: done.rows_affected() as usize,
                failures: Vec::new(),
            }),
            Err(e) if is_connection_error(&e) => Err(connection_error(e)),
            Err(e) => {
                tracing::warn!(error = %e, "Bulk update rejected, retrying row by row");
                update_each(&mut conn, updates).await
            }
        }
    }
}

async fn update_each(
    conn: &mut PgConnection,
    updates: &[PendingUpdate],
) -> Result<BulkWriteReport, RepositoryError> {
    let mut report = BulkWriteReport::default();

    for update in updates {
        let result = sqlx::query(
            r#"
            UPDATE files
            SET normalized_text = $1
            WHERE id = $2 AND normalized_text IS NULL
            "#,
        )
        .bind(update.lemmas.to_vec())
        .bind(update.id.as_uuid())
        .execute(&mut *conn)
        .await;

        match result {
            Ok(done) => report.modified += done.rows_affected() as usize,
            Err(e) if is_connection_error(&e) => return Err(connection_error(e)),
            Err(e) => report.failures.push(WriteFailure {
                id: update.id,
                reason: e.to_string(),
            }),
        }
    }

    Ok(report)
}

/// Batch ids, then one `(owner id, lemma)` pair per lemma. Records with an
/// empty lemma set appear only in the id list.
fn flatten(updates: &[PendingUpdate]) -> (Vec<Uuid>, Vec<Uuid>, Vec<String>) {
    let ids = updates.iter().map(|u| u.id.as_uuid()).collect();
    let (owners, lemmas) = updates
        .iter()
        .flat_map(|u| u.lemmas.iter().map(move |lemma| (u.id.as_uuid(), lemma.to_owned())))
        .unzip();
    (ids, owners, lemmas)
}

fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

fn connection_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::ConnectionFailed(e.to_string())
}
