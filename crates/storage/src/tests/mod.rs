//! Test utilities and module declarations for storage tests.

use chief_core::{ActionItem, ActionStatus, ExtractedAction, Priority, Workspace};
use tempfile::TempDir;

use crate::Storage;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path, 4).unwrap();
    (storage, temp_dir)
}

pub fn create_test_action(id: &str, due_date: Option<&str>) -> ActionItem {
    ActionItem::from_extracted(
        id.to_owned(),
        ExtractedAction {
            description: format!("Task {id}"),
            assignee: None,
            due_date: due_date.map(ToOwned::to_owned),
            priority: Priority::Medium,
        },
        Workspace::Operations,
        Some("sess0001".to_owned()),
    )
}

pub fn pending(storage: &Storage, user: &str) -> Vec<ActionItem> {
    storage.actions_by_status(user, ActionStatus::Pending).unwrap()
}

mod note_tests;
mod vector_tests;

#[test]
fn migrations_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    drop(Storage::new(&db_path, 2).unwrap());
    let reopened = Storage::new(&db_path, 2).unwrap();
    assert!(reopened.list_documents(None).unwrap().is_empty());
}
