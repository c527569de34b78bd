use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::ports::{RepositoryError, RunLogRepository};
use crate::domain::RunLogEntry;

/// Keeps run log entries in memory. `failing()` builds one whose inserts
/// are always rejected.
#[derive(Default)]
pub struct InMemoryRunLogRepository {
    entries: Mutex<Vec<RunLogEntry>>,
    fail_inserts: bool,
}

impl InMemoryRunLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_inserts: true,
        }
    }

    pub fn entries(&self) -> Vec<RunLogEntry> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RunLogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl RunLogRepository for InMemoryRunLogRepository {
    async fn insert(&self, entry: &RunLogEntry) -> Result<(), RepositoryError> {
        if self.fail_inserts {
            return Err(RepositoryError::ConnectionFailed(
                "run log store unavailable".to_string(),
            ));
        }
        self.lock().push(entry.clone());
        Ok(())
    }
}
