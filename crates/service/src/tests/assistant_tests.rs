use chief_core::{ConversationContext, Intent, Workspace};

use super::create_test_services;
use crate::ServiceError;

#[tokio::test]
async fn conversation_goes_to_the_model_with_history() {
    let t = create_test_services(&["Happy to help, Chief."]);
    let mut ctx = ConversationContext::new();

    let reply = t.services.assistant.handle(&mut ctx, "How should I prepare for the commission?").await.unwrap();

    assert_eq!(reply.intent, Intent::Conversation);
    assert_eq!(reply.workspace, Workspace::Command);
    assert_eq!(reply.text, "Happy to help, Chief.");
    assert_eq!(ctx.len(), 2);
    assert_eq!(t.model.last_user_message().as_deref(), Some("How should I prepare for the commission?"));
}

#[tokio::test]
async fn note_session_flow_through_the_assistant() {
    // given
    let t = create_test_services(&[
        r#"[{"description": "Pull overtime data for the union", "priority": "high"}]"#,
        "- Union wants overtime data",
    ]);
    let mut ctx = ConversationContext::new();

    // when: start, add, end
    let started = t.services.assistant.handle(&mut ctx, "Start taking notes on union negotiations").await.unwrap();
    let session_id = ctx.active_note_session.clone().unwrap();
    let added = t.services.assistant.handle(&mut ctx, "note the union wants overtime data").await.unwrap();
    let ended = t.services.assistant.handle(&mut ctx, "end notes").await.unwrap();

    // then
    assert_eq!(started.intent, Intent::NoteStart);
    assert!(started.text.contains("union negotiations"));
    assert_eq!(added.intent, Intent::NoteAdd);
    assert_eq!(added.actions.len(), 1);
    assert!(added.text.contains("Pull overtime data for the union"));
    assert_eq!(ended.intent, Intent::NoteEnd);
    assert!(ended.text.contains("- Union wants overtime data"));
    assert!(ctx.active_note_session.is_none());

    let session = t.services.notes.get_session(&session_id).await.unwrap();
    assert_eq!(session.title, "union negotiations");
    assert!(!session.is_active());
}

#[tokio::test]
async fn note_without_session_starts_one() {
    let t = create_test_services(&["[]"]);
    let mut ctx = ConversationContext::new();

    let reply = t.services.assistant.handle(&mut ctx, "remember to call the sponsors").await.unwrap();

    assert_eq!(reply.intent, Intent::NoteAdd);
    assert_eq!(reply.text, "Noted.");
    let id = ctx.active_note_session.unwrap();
    assert_eq!(t.services.notes.get_session(&id).await.unwrap().entries.len(), 1);
}

#[tokio::test]
async fn ending_without_session_is_harmless() {
    let t = create_test_services(&[]);
    let mut ctx = ConversationContext::new();

    let reply = t.services.assistant.handle(&mut ctx, "stop notes").await.unwrap();

    assert_eq!(reply.intent, Intent::NoteEnd);
    assert_eq!(reply.text, "No active note session.");
    assert_eq!(t.model.calls(), 0);
}

#[tokio::test]
async fn calendar_and_briefing_work_without_a_calendar() {
    let t = create_test_services(&[]);
    let mut ctx = ConversationContext::new();

    let calendar = t.services.assistant.handle(&mut ctx, "what's on my calendar today").await.unwrap();
    let briefing = t.services.assistant.handle(&mut ctx, "give me a status update").await.unwrap();

    assert_eq!(calendar.intent, Intent::CalendarQuery);
    assert_eq!(calendar.text, "Calendar is not connected.");
    assert_eq!(briefing.intent, Intent::Briefing);
    assert!(briefing.text.starts_with("Good morning, Chief."));
    assert_eq!(t.model.calls(), 0);
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let t = create_test_services(&[]);
    let mut ctx = ConversationContext::new();

    let err = t.services.assistant.handle(&mut ctx, "   ").await.unwrap_err();

    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert!(ctx.is_empty());
}

#[tokio::test]
async fn failed_turn_is_dropped_from_history() {
    let t = create_test_services(&[]);
    t.model.push_failure();
    t.model.push_reply("Start with the budget.");
    let mut ctx = ConversationContext::new();

    let failed = t.services.assistant.handle(&mut ctx, "How should I prepare for the commission?").await;
    assert!(failed.is_err());
    assert!(ctx.is_empty());

    let reply = t.services.assistant.handle(&mut ctx, "How should I prepare for the commission?").await.unwrap();

    assert_eq!(reply.text, "Start with the budget.");
    assert_eq!(ctx.len(), 2);
    assert_eq!(t.model.user_turns_in_last_request(), 1);
}
