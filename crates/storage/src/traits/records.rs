use async_trait::async_trait;
use chief_core::{Contact, Credential, Document};

use crate::error::StorageError;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn save_credential(&self, user_id: &str, credential: &Credential) -> Result<(), StorageError>;

    async fn get_credential(&self, user_id: &str, name: &str) -> Result<Option<Credential>, StorageError>;

    async fn list_credentials(&self, user_id: &str) -> Result<Vec<Credential>, StorageError>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn save_contact(&self, user_id: &str, contact: &Contact) -> Result<(), StorageError>;

    async fn get_contact(&self, user_id: &str, name: &str) -> Result<Option<Contact>, StorageError>;

    async fn list_contacts(&self, user_id: &str) -> Result<Vec<Contact>, StorageError>;
}

/// Document metadata. Chunk vectors live in a [`super::VectorIndex`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save_document(&self, document: &Document) -> Result<(), StorageError>;

    async fn get_document(&self, id: &str) -> Result<Option<Document>, StorageError>;

    async fn list_documents(&self, doc_type: Option<&str>) -> Result<Vec<Document>, StorageError>;

    /// Returns `true` if a document was deleted.
    async fn delete_document(&self, id: &str) -> Result<bool, StorageError>;
}
