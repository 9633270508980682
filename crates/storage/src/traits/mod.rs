//! Async store traits
//!
//! Services depend on these rather than on [`crate::Storage`] so the vector
//! index can be swapped for Qdrant and tests can supply their own stores.

pub mod notes;
pub mod records;
pub mod vector;

pub use notes::{ActionItemStore, NoteSessionStore};
pub use records::{ContactStore, CredentialStore, DocumentStore};
pub use vector::VectorIndex;
