use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::ports::{
    BulkWriteReport, DocumentStore, PendingUpdate, RepositoryError, WriteFailure,
};
use crate::domain::{DocumentId, PathRecord};

#[derive(Debug, Clone, Default)]
struct StoredFile {
    path: Option<String>,
    normalized_text: Option<Vec<String>>,
}

/// Document store held in memory, ordered by id like the SQL adapter.
///
/// Failure injection: `reject_updates_for` makes individual updates fail
/// inside a bulk write, `fail_fetch_after` makes the n-th and later page
/// reads fail as if the connection dropped.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    files: Mutex<BTreeMap<DocumentId, StoredFile>>,
    rejected: Mutex<HashSet<DocumentId>>,
    bulk_sizes: Mutex<Vec<usize>>,
    fetch_calls: AtomicUsize,
    fail_fetch_after: Option<usize>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for path in paths {
            store.insert_path(path);
        }
        store
    }

    /// Allows `successful_fetches` page reads, then fails every later one.
    pub fn fail_fetch_after(mut self, successful_fetches: usize) -> Self {
        self.fail_fetch_after = Some(successful_fetches);
        self
    }

    pub fn insert_path(&self, path: impl Into<String>) -> DocumentId {
        let id = DocumentId::new();
        lock(&self.files).insert(
            id,
            StoredFile {
                path: Some(path.into()),
                normalized_text: None,
            },
        );
        id
    }

    /// A file entry without a path, which must never be selected.
    pub fn insert_without_path(&self) -> DocumentId {
        let id = DocumentId::new();
        lock(&self.files).insert(id, StoredFile::default());
        id
    }

    pub fn insert_processed(&self, path: impl Into<String>, lemmas: Vec<String>) -> DocumentId {
        let id = DocumentId::new();
        lock(&self.files).insert(
            id,
            StoredFile {
                path: Some(path.into()),
                normalized_text: Some(lemmas),
            },
        );
        id
    }

    pub fn reject_updates_for(&self, id: DocumentId) {
        lock(&self.rejected).insert(id);
    }

    pub fn normalized_text(&self, id: DocumentId) -> Option<Vec<String>> {
        lock(&self.files)
            .get(&id)
            .and_then(|f| f.normalized_text.clone())
    }

    pub fn unprocessed_count(&self) -> usize {
        lock(&self.files)
            .values()
            .filter(|f| f.path.is_some() && f.normalized_text.is_none())
            .count()
    }

    /// Size of every bulk write received, in call order.
    pub fn bulk_write_sizes(&self) -> Vec<usize> {
        lock(&self.bulk_sizes).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch_unprocessed(
        &self,
        after: Option<DocumentId>,
        limit: usize,
    ) -> Result<Vec<PathRecord>, RepositoryError> {
        let call = self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch_after.is_some_and(|allowed| call >= allowed) {
            return Err(RepositoryError::ConnectionFailed(
                "connection reset by peer".to_string(),
            ));
        }

        Ok(lock(&self.files)
            .iter()
            .filter(|(id, _)| after.is_none_or(|after| **id > after))
            .filter_map(|(id, file)| match (&file.path, &file.normalized_text) {
                (Some(path), None) => Some(PathRecord {
                    id: *id,
                    path: path.clone(),
                }),
                _ => None,
            })
            .take(limit)
            .collect())
    }

    async fn bulk_update(
        &self,
        updates: &[PendingUpdate],
    ) -> Result<BulkWriteReport, RepositoryError> {
        lock(&self.bulk_sizes).push(updates.len());

        let rejected = lock(&self.rejected).clone();
        let mut files = lock(&self.files);
        let mut report = BulkWriteReport::default();

        for update in updates {
            if rejected.contains(&update.id) {
                report.failures.push(WriteFailure {
                    id: update.id,
                    reason: "document failed validation".to_string(),
                });
                continue;
            }

            if let Some(file) = files.get_mut(&update.id) {
                if file.normalized_text.is_none() {
                    file.normalized_text = Some(update.lemmas.to_vec());
                    report.modified += 1;
                }
            }
        }

        Ok(report)
    }
}
