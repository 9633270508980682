#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use chief_core::{ActionItem, ActionStatus, Credential, ExtractedAction, Priority, Workspace};
use chief_storage::{ActionItemStore, CredentialStore, Storage};
use tempfile::tempdir;

fn action(i: usize) -> ActionItem {
    ActionItem::from_extracted(
        format!("act{i:05}"),
        ExtractedAction {
            description: format!("Follow up {i}"),
            assignee: None,
            due_date: None,
            priority: Priority::High,
        },
        Workspace::Operations,
        None,
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_action_saves_are_all_kept() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(Storage::new(&dir.path().join("test.db"), 4).unwrap());

    let mut handles = vec![];
    for i in 0..10 {
        let store: Arc<dyn ActionItemStore> = storage.clone();
        handles.push(tokio::spawn(async move { store.save_action("steven", &action(i)).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let store: Arc<dyn ActionItemStore> = storage;
    let pending = store.actions_by_status("steven", ActionStatus::Pending).await.unwrap();
    assert_eq!(pending.len(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_upserts_of_one_credential_leave_one_row() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(Storage::new(&dir.path().join("test.db"), 4).unwrap());

    let mut handles = vec![];
    for hours in 0..8 {
        let store: Arc<dyn CredentialStore> = storage.clone();
        handles.push(tokio::spawn(async move {
            let mut credential = Credential::new("EMT-P", "license");
            credential.ceu_required = 40;
            credential.ceu_earned = hours;
            store.save_credential("steven", &credential).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let store: Arc<dyn CredentialStore> = storage;
    let all = store.list_credentials("steven").await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].ceu_earned < 8);
}
