use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{DocumentId, LemmaSet, PathRecord};

/// Normalized result waiting to be written for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    pub id: DocumentId,
    pub lemmas: LemmaSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteFailure {
    pub id: DocumentId,
    pub reason: String,
}

/// Outcome of an unordered bulk write. Every update was attempted; the ones
/// the store rejected are listed in `failures`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkWriteReport {
    pub modified: usize,
    pub failures: Vec<WriteFailure>,
}

impl BulkWriteReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Records that have a path but no normalized result, ordered by id and
    /// starting strictly after `after`.
    async fn fetch_unprocessed(
        &self,
        after: Option<DocumentId>,
        limit: usize,
    ) -> Result<Vec<PathRecord>, RepositoryError>;

    async fn bulk_update(
        &self,
        updates: &[PendingUpdate],
    ) -> Result<BulkWriteReport, RepositoryError>;
}
