mod document_store;
mod morph_analyzer;
mod repository_error;
mod run_log_repository;
mod run_notifier;

pub use document_store::{BulkWriteReport, DocumentStore, PendingUpdate, WriteFailure};
pub use morph_analyzer::{MorphAnalyzer, MorphologyError, SentenceLemmatizer};
pub use repository_error::RepositoryError;
pub use run_log_repository::RunLogRepository;
pub use run_notifier::{NotifierError, RunNotifier};
