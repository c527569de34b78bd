use crate::domain::RunLogEntry;
use async_trait::async_trait;

use super::RepositoryError;

#[async_trait]
pub trait RunLogRepository: Send + Sync {
    async fn insert(&self, entry: &RunLogEntry) -> Result<(), RepositoryError>;
}
