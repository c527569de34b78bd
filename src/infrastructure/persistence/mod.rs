mod document_store;
mod pg_pool;
mod repositories;

pub use document_store::InMemoryDocumentStore;
pub use document_store::PgDocumentStore;

pub use repositories::InMemoryRunLogRepository;
pub use repositories::PgRunLogRepository;

pub use pg_pool::{create_pool, database_url};
