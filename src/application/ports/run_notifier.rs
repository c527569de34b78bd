use async_trait::async_trait;

#[async_trait]
pub trait RunNotifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), NotifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("notification request failed: {0}")]
    RequestFailed(String),
    #[error("notification rejected with HTTP {0}")]
    Rejected(u16),
}
