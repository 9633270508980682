//! Storage layer for chief
//!
//! A single `SQLite` table of partitioned items (`pk`, `sk`) with one
//! secondary index (`gsi1pk`, `gsi1sk`), typed stores on top of it, and the
//! vector indexes holding document chunks: a local sqlite-vec table or a
//! remote Qdrant collection.

mod error;
pub mod keys;
mod migrations;
mod qdrant;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod vec_init;

pub use error::StorageError;
pub use qdrant::QdrantIndex;
pub use storage::Storage;
pub use traits::{
    ActionItemStore, ContactStore, CredentialStore, DocumentStore, NoteSessionStore, VectorIndex,
};
pub use vec_init::init_sqlite_vec;
