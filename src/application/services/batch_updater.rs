use std::sync::Arc;

use crate::application::ports::{DocumentStore, PendingUpdate};
use crate::domain::DocumentId;

use super::NormalizationContext;

pub const DEFAULT_FLUSH_SIZE: usize = 1000;
pub const DEFAULT_FETCH_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Pending updates held before a bulk commit.
    pub flush_size: usize,
    /// Page size requested from the store per round-trip.
    pub fetch_size: usize,
    /// Maximum records handled in one run, `0` for no cap.
    pub limit: usize,
}

impl BatchOptions {
    pub fn new(flush_size: usize, fetch_size: usize, limit: usize) -> Self {
        Self {
            flush_size: flush_size.max(1),
            fetch_size: fetch_size.max(1),
            limit,
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FLUSH_SIZE, DEFAULT_FETCH_SIZE, 0)
    }
}

/// Walks every unprocessed record once, normalizes its path and writes the
/// lemmas back in unordered bulk commits.
pub struct BatchUpdater {
    store: Arc<dyn DocumentStore>,
    options: BatchOptions,
}

impl BatchUpdater {
    pub fn new(store: Arc<dyn DocumentStore>, options: BatchOptions) -> Self {
        Self { store, options }
    }

    /// Returns the number of records whose lemmas were committed. On failure
    /// the error still carries that count, since earlier flushes stay
    /// committed.
    pub async fn run(&self, context: &NormalizationContext) -> Result<usize, BatchRunError> {
        tracing::info!(
            strategy = context.normalizer().strategy_name(),
            flush_size = self.options.flush_size,
            fetch_size = self.options.fetch_size,
            limit = self.options.limit,
            "Normalization started"
        );

        let mut committed = 0usize;
        match self.process(context, &mut committed).await {
            Ok(()) => {
                tracing::info!(processed = committed, "Normalization finished");
                Ok(committed)
            }
            Err(kind) => Err(BatchRunError { committed, kind }),
        }
    }

    async fn process(
        &self,
        context: &NormalizationContext,
        committed: &mut usize,
    ) -> Result<(), BatchUpdateError> {
        let mut batch: Vec<PendingUpdate> = Vec::with_capacity(self.options.flush_size);
        let mut last_seen: Option<DocumentId> = None;
        let mut selected = 0usize;

        while let Some(page_size) = self.next_page_size(selected) {
            let page = self
                .store
                .fetch_unprocessed(last_seen, page_size)
                .await
                .map_err(BatchUpdateError::Store)?;

            if page.is_empty() {
                break;
            }

            for record in page {
                last_seen = Some(record.id);
                selected += 1;

                let lemmas = context
                    .normalize_path(&record.path)
                    .await
                    .map_err(BatchUpdateError::Morphology)?;

                tracing::debug!(
                    path = %record.path,
                    lemmas = %lemmas.joined(),
                    "Path normalized"
                );

                batch.push(PendingUpdate {
                    id: record.id,
                    lemmas,
                });

                if batch.len() >= self.options.flush_size {
                    self.flush(&mut batch, committed).await?;
                    tracing::info!(processed = *committed, "Batch committed");
                }
            }
        }

        if !batch.is_empty() {
            self.flush(&mut batch, committed).await?;
            tracing::info!(processed = *committed, "Final batch committed");
        }

        Ok(())
    }

    fn next_page_size(&self, selected: usize) -> Option<usize> {
        if self.options.limit == 0 {
            return Some(self.options.fetch_size);
        }

        let remaining = self.options.limit.saturating_sub(selected);
        (remaining > 0).then(|| remaining.min(self.options.fetch_size))
    }

    /// Rows the store accepted are added to `committed` even when others in
    /// the same batch were rejected.
    async fn flush(
        &self,
        batch: &mut Vec<PendingUpdate>,
        committed: &mut usize,
    ) -> Result<(), BatchUpdateError> {
        let attempted = batch.len();
        let report = self
            .store
            .bulk_update(batch)
            .await
            .map_err(BatchUpdateError::Store)?;
        batch.clear();

        let succeeded = attempted.saturating_sub(report.failures.len());
        *committed += succeeded;

        if !report.is_complete() {
            for failure in &report.failures {
                tracing::warn!(
                    document_id = %failure.id.as_uuid(),
                    reason = %failure.reason,
                    "Update rejected by store"
                );
            }
            return Err(BatchUpdateError::PartialCommit {
                failed: report.failures.len(),
                succeeded,
            });
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BatchUpdateError {
    #[error("document store: {0}")]
    Store(crate::application::ports::RepositoryError),
    #[error("morphology: {0}")]
    Morphology(crate::application::ports::MorphologyError),
    #[error("bulk commit rejected {failed} updates ({succeeded} applied)")]
    PartialCommit { failed: usize, succeeded: usize },
}

/// A failed run, with the number of records committed before it stopped.
#[derive(Debug, thiserror::Error)]
#[error("{kind} ({committed} records committed)")]
pub struct BatchRunError {
    pub committed: usize,
    #[source]
    pub kind: BatchUpdateError,
}
