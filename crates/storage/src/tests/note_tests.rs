use chief_core::{ActionStatus, InputType, NoteEntry, NoteSession, Workspace};
use chrono::Utc;

use super::{create_test_action, create_test_storage, pending};

#[test]
fn session_round_trip_with_entries() {
    let (storage, _dir) = create_test_storage();
    let mut session =
        NoteSession::new("a1b2c3d4".into(), "steven".into(), "Staff meeting".into(), Workspace::Command);
    storage.save_session(&session).unwrap();

    session.entries.push(NoteEntry {
        timestamp: Utc::now(),
        content: "Council wants the CRR numbers".into(),
        input_type: InputType::Sms,
    });
    storage.save_session(&session).unwrap();

    let loaded = storage.get_session("a1b2c3d4").unwrap().unwrap();
    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].input_type, InputType::Sms);
    assert_eq!(loaded.workspace, Workspace::Command);
}

#[test]
fn missing_session_is_none() {
    let (storage, _dir) = create_test_storage();
    assert!(storage.get_session("nope").unwrap().is_none());
}

#[test]
fn sessions_are_listed_per_user() {
    let (storage, _dir) = create_test_storage();
    for (id, user) in [("s1", "steven"), ("s2", "steven"), ("s3", "someone")] {
        let session = NoteSession::new(id.into(), user.into(), "Notes".into(), Workspace::Operations);
        storage.save_session(&session).unwrap();
    }
    let sessions = storage.list_sessions("steven").unwrap();
    assert_eq!(sessions.len(), 2);
    assert!(sessions.iter().all(|s| s.user_id == "steven"));
}

#[test]
fn pending_actions_come_from_the_status_index() {
    let (storage, _dir) = create_test_storage();
    storage
        .save_actions(
            "steven",
            &[create_test_action("a2", Some("2026-11-01")), create_test_action("a1", Some("2026-10-20"))],
        )
        .unwrap();
    storage.save_action("someone", &create_test_action("a3", None)).unwrap();

    let actions = pending(&storage, "steven");
    let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
}

#[test]
fn completing_an_action_moves_it_out_of_pending() {
    let (storage, _dir) = create_test_storage();
    let mut action = create_test_action("a1", None);
    storage.save_action("steven", &action).unwrap();

    action.status = ActionStatus::Done;
    storage.save_action("steven", &action).unwrap();

    assert!(pending(&storage, "steven").is_empty());
    let done = storage.actions_by_status("steven", ActionStatus::Done).unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(storage.get_action("steven", "a1").unwrap().unwrap().status, ActionStatus::Done);
}
