use chief_core::{Citation, ChunkPayload, Priority, ScoredChunk, Workspace};

use crate::error::LlmError;
use crate::test_support::ScriptedModel;
use crate::{EXTRACTION_SYSTEM_PROMPT, answer_from_context, extract_action_items, parse_extraction, summarize_notes};

#[test]
fn parses_plain_array() {
    let reply = r#"[{"description": "Send budget memo to city manager", "assignee": "Steven", "due_date": "Friday", "priority": "high"}]"#;
    let actions = parse_extraction(reply).unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].assignee.as_deref(), Some("Steven"));
    assert_eq!(actions[0].priority, Priority::High);
}

#[test]
fn strips_code_fences_and_null_strings() {
    let reply = "```json\n[{\"description\": \"Order hose\", \"assignee\": \"null\", \"due_date\": null}]\n```";
    let actions = parse_extraction(reply).unwrap();
    assert_eq!(actions.len(), 1);
    assert!(actions[0].assignee.is_none());
    assert!(actions[0].due_date.is_none());
    assert_eq!(actions[0].priority, Priority::Medium);
}

#[test]
fn empty_array_is_a_successful_extraction() {
    assert!(parse_extraction("[]").unwrap().is_empty());
}

#[test]
fn blank_descriptions_are_dropped() {
    let actions = parse_extraction(r#"[{"description": "  "}, {"description": "Call vendor"}]"#).unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].description, "Call vendor");
}

#[test]
fn prose_is_rejected() {
    assert!(parse_extraction("There are no action items here.").is_err());
    assert!(parse_extraction(r#"{"description": "not an array"}"#).is_err());
}

#[tokio::test]
async fn extraction_sends_system_prompt_and_note() {
    // given
    let model = ScriptedModel::replying(r#"[{"description": "Schedule station visit"}]"#);

    // when
    let extraction = extract_action_items(&model, "Need to schedule a station visit", Workspace::Operations).await;

    // then
    assert_eq!(extraction.actions().len(), 1);
    let requests = model.requests.lock().unwrap();
    assert_eq!(requests[0][0].role, "system");
    assert_eq!(requests[0][0].content, EXTRACTION_SYSTEM_PROMPT);
    assert_eq!(requests[0][1].content, "Need to schedule a station visit");
}

#[tokio::test]
async fn model_failure_is_reported_not_swallowed() {
    let model = ScriptedModel::new(vec![Err(LlmError::HttpStatus { code: 401, body: "bad key".into() })]);
    let extraction = extract_action_items(&model, "anything", Workspace::Command).await;
    assert!(extraction.is_failed());
}

#[tokio::test]
async fn unparseable_reply_is_reported() {
    let model = ScriptedModel::replying("Sure! Here are the items: none");
    let extraction = extract_action_items(&model, "anything", Workspace::Command).await;
    assert!(extraction.is_failed());
}

#[tokio::test]
async fn summary_is_trimmed() {
    let model = ScriptedModel::replying("  - budget\n- staffing\n");
    let summary = summarize_notes(&model, "budget talk\nstaffing talk").await.unwrap();
    assert_eq!(summary, "- budget\n- staffing");
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn answer_prompt_numbers_sources() {
    let model = ScriptedModel::replying("Time and a half [Source 1].");
    let citations = Citation::ranked(vec![ScoredChunk {
        score: 0.91,
        payload: ChunkPayload {
            doc_id: "abc".into(),
            title: "IAFF Local 2928 CBA".into(),
            doc_type: "cba".into(),
            chunk_index: 0,
            chunk_text: "ARTICLE 12 - OVERTIME".into(),
        },
    }]);

    let answer = answer_from_context(&model, "How is overtime paid?", &citations).await.unwrap();

    assert_eq!(answer, "Time and a half [Source 1].");
    let requests = model.requests.lock().unwrap();
    let user = &requests[0][1].content;
    assert!(user.contains("[Source 1: IAFF Local 2928 CBA]\nARTICLE 12 - OVERTIME"));
    assert!(user.contains("QUESTION: How is overtime paid?"));
}
