mod in_memory_document_store;
mod pg_document_store;

pub use in_memory_document_store::InMemoryDocumentStore;
pub use pg_document_store::PgDocumentStore;
