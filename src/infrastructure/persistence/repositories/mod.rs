mod in_memory_run_log_repository;
mod pg_run_log_repository;

pub use in_memory_run_log_repository::InMemoryRunLogRepository;
pub use pg_run_log_repository::PgRunLogRepository;
