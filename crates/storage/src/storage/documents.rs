use chief_core::Document;

use super::Storage;
use super::items::ItemRow;
use crate::error::StorageError;
use crate::keys::{DOC_PREFIX, META, date_gsi, doc_pk, type_gsi};

impl Storage {
    pub fn save_document(&self, document: &Document) -> Result<(), StorageError> {
        let pk = doc_pk(&document.id);
        let row = ItemRow::new(&pk, META).indexed(
            type_gsi(&document.doc_type),
            date_gsi(&document.created_at.format("%Y-%m-%d").to_string()),
        );
        self.put_item(&row, document)
    }

    pub fn get_document(&self, id: &str) -> Result<Option<Document>, StorageError> {
        self.get_item(&doc_pk(id), META)
    }

    /// All documents, or only those of `doc_type` via the secondary index.
    pub fn list_documents(&self, doc_type: Option<&str>) -> Result<Vec<Document>, StorageError> {
        match doc_type {
            Some(kind) => self.query_index(&type_gsi(kind), DOC_PREFIX, Some(META)),
            None => self.scan_prefix(DOC_PREFIX, META),
        }
    }

    pub fn delete_document(&self, id: &str) -> Result<bool, StorageError> {
        self.delete_item(&doc_pk(id), META)
    }
}
