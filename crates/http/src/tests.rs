use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chief_core::AppConfig;
use chief_service::{Collaborators, Services};
use chief_storage::Storage;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{AppState, create_router};

fn test_services() -> (Services, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::local(dir.path().join("chief.db"));
    let storage = Arc::new(Storage::new(&config.db_path, 4).unwrap());
    (Services::with_storage(&config, storage, Collaborators::default()), dir)
}

fn test_app() -> (Router, TempDir) {
    let (services, dir) = test_services();
    (create_router(Arc::new(AppState::new(services))), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_and_version() {
    let (app, _dir) = test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let (status, version) = send(&app, "GET", "/api/version", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn credential_routes() {
    let (app, _dir) = test_app();
    let body = json!({
        "name": "EMT-P", "credential_type": "license", "expiration_date": "2026-03-31",
        "ceu_required": 40, "ceu_earned": 28, "issuing_body": "Florida DOH"
    });

    let (created, _) = send(&app, "POST", "/api/credentials", Some(body)).await;
    let (status, update) = send(&app, "POST", "/api/credentials/EMT-P/ceu", Some(json!({"hours": 4}))).await;
    let (_, progress) = send(&app, "GET", "/api/credentials/ceu", None).await;
    let (_, report) = send(&app, "GET", "/api/credentials/report", None).await;
    let (missing, error) = send(&app, "GET", "/api/credentials/Paramedic", None).await;

    assert_eq!(created, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(update, json!({"credential": "EMT-P", "earned": 32, "required": 40, "remaining": 8, "complete": false}));
    assert_eq!(progress[0]["percent"], 80);
    assert!(report["report"].as_str().unwrap().contains("Active Credentials: 1"));
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert!(error["error"].as_str().unwrap().contains("Paramedic"));
}

#[tokio::test]
async fn note_session_lifecycle_without_a_model() {
    let (app, _dir) = test_app();

    let (_, session) =
        send(&app, "POST", "/api/notes/sessions", Some(json!({"title": "Council prep"}))).await;
    let id = session["id"].as_str().unwrap().to_owned();
    assert_eq!(session["workspace"], "command");

    let (status, outcome) = send(
        &app,
        "POST",
        &format!("/api/notes/sessions/{id}/entries"),
        Some(json!({"content": "Prepare budget slides"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["extraction"]["status"], "failed");

    let (_, closed) = send(&app, "POST", &format!("/api/notes/sessions/{id}/end"), None).await;
    assert_eq!(closed["status"], "closed");
    assert_eq!(closed["summary"], "Summary unavailable");

    let (again, _) = send(&app, "POST", &format!("/api/notes/sessions/{id}/end"), None).await;
    assert_eq!(again, StatusCode::CONFLICT);

    let (missing, _) = send(
        &app,
        "POST",
        "/api/notes/sessions/zzzzzzzz/entries",
        Some(json!({"content": "orphan"})),
    )
    .await;
    assert_eq!(missing, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn manual_actions_and_completion() {
    let (app, _dir) = test_app();

    let (_, action) = send(
        &app,
        "POST",
        "/api/actions",
        Some(json!({"description": "Book FTFC speakers", "priority": "high"})),
    )
    .await;
    let id = action["id"].as_str().unwrap().to_owned();
    assert_eq!(action["workspace"], "logistics");

    let (_, pending) = send(&app, "GET", "/api/actions/pending", None).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);

    let (_, done) = send(&app, "POST", &format!("/api/actions/{id}/complete"), None).await;
    assert_eq!(done["status"], "done");
    let (_, pending) = send(&app, "GET", "/api/actions/pending", None).await;
    assert!(pending.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn document_routes_need_embeddings() {
    let (app, _dir) = test_app();

    let (status, error) = send(&app, "GET", "/api/documents/search?q=overtime", None).await;
    let (listed, docs) = send(&app, "GET", "/api/documents", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(error["error"].as_str().unwrap().contains("embedding"));
    assert_eq!(listed, StatusCode::OK);
    assert!(docs.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn contact_search_and_tone() {
    let (app, _dir) = test_app();
    send(
        &app,
        "POST",
        "/api/contacts",
        Some(json!({"name": "City Manager", "role": "City Manager", "organization": "City of Sunrise",
                    "communication_style": "formal_analytical"})),
    )
    .await;

    let (_, found) = send(&app, "GET", "/api/contacts?q=sunrise", None).await;
    let (_, tone) = send(&app, "GET", "/api/contacts/City%20Manager/tone", None).await;

    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(tone["style"], "formal_analytical");
}

#[tokio::test]
async fn chat_keeps_the_conversation_id() {
    let (app, _dir) = test_app();

    let (status, reply) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({"message": "what's on my calendar today", "conversation_id": "c1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["conversation_id"], "c1");
    assert_eq!(reply["intent"], "calendar_query");
    assert_eq!(reply["text"], "Calendar is not connected.");
}

#[tokio::test]
async fn conversations_are_capped_at_capacity() {
    let (services, _dir) = test_services();
    let state = Arc::new(AppState::with_capacity(services, NonZeroUsize::new(4).unwrap()));
    let app = create_router(Arc::clone(&state));

    for _ in 0..10 {
        let (status, _) =
            send(&app, "POST", "/api/chat", Some(json!({"message": "what's on my calendar today"})))
                .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({"message": "what's on my calendar today", "conversation_id": "kept"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.conversation_count().await, 4);
}

#[tokio::test]
async fn sms_webhook_requires_a_body_and_answers_with_twiml() {
    let (app, _dir) = test_app();
    let form = |body: &str| {
        Request::builder()
            .method("POST")
            .uri("/webhook/sms")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    };

    let rejected = app.clone().oneshot(form("From=%2B15551234567&Body=")).await.unwrap();
    let accepted = app.clone().oneshot(form("From=%2B15551234567&Body=status+update")).await.unwrap();

    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(accepted.headers()[header::CONTENT_TYPE], "text/xml");
    let body = to_bytes(accepted.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains("<Response></Response>"));
}

#[tokio::test]
async fn briefing_webhook_falls_back_without_calendar() {
    let (app, _dir) = test_app();

    let (status, briefing) =
        send(&app, "POST", "/webhook/briefing", Some(json!({"briefing_type": "eod"}))).await;
    let (bad, _) =
        send(&app, "POST", "/webhook/briefing", Some(json!({"briefing_type": "weekly"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(briefing["briefing_type"], "end-of-day");
    assert_eq!(briefing["sent"], false);
    assert!(briefing["message"].as_str().unwrap().contains("Calendar unavailable."));
    assert_eq!(bad, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calendar_routes_report_missing_provider() {
    let (app, _dir) = test_app();
    let event = json!({
        "summary": "Budget review",
        "start": "2026-10-21T10:00:00-04:00",
        "end": "2026-10-21T11:00:00-04:00"
    });

    let (created, _) = send(&app, "POST", "/api/calendar/events", Some(event)).await;
    let (free, error) = send(&app, "GET", "/api/calendar/free?days=5", None).await;

    assert_eq!(created, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(free, StatusCode::SERVICE_UNAVAILABLE);
    assert!(error["error"].as_str().unwrap().contains("calendar"));
}
