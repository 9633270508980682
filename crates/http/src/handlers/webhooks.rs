use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::{Form, Json};
use chief_core::InputType;
use chief_service::{BriefingKind, build_briefing};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{BriefingRequest, BriefingResponse, SmsForm};

const EMPTY_TWIML: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Response></Response>"#;

/// Twilio inbound SMS. Acknowledges immediately; the reply is sent from a
/// background task.
pub async fn sms(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SmsForm>,
) -> Result<impl IntoResponse, ApiError> {
    if form.body.trim().is_empty() {
        return Err(ApiError::BadRequest("No message body".to_owned()));
    }

    tokio::spawn(async move {
        let from = form.from;
        let context = state.conversation(&format!("sms:{from}")).await;
        let mut ctx = context.lock().await;
        let text = match state.services.assistant.handle_input(&mut ctx, &form.body, InputType::Sms).await {
            Ok(reply) => reply.text,
            Err(e) => {
                tracing::warn!(error = %e, "SMS message handling failed");
                "Sorry, something went wrong handling that message.".to_owned()
            },
        };
        drop(ctx);

        match &state.services.messenger {
            Some(messenger) => {
                if let Err(e) = messenger.send(&from, &text).await {
                    tracing::warn!(error = %e, "SMS reply failed");
                }
            },
            None => tracing::warn!("SMS reply dropped: messaging is not configured"),
        }
    });

    Ok(([(header::CONTENT_TYPE, "text/xml")], EMPTY_TWIML))
}

/// Scheduled briefing trigger. The text is returned and, when messaging and
/// the user's phone are configured, pushed by SMS.
pub async fn briefing(
    State(state): State<Arc<AppState>>,
    body: Option<Json<BriefingRequest>>,
) -> Result<Json<BriefingResponse>, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let kind = match req.briefing_type.as_deref() {
        Some(raw) => raw.parse::<BriefingKind>()?,
        None => BriefingKind::Morning,
    };

    let message = build_briefing(&state.services.calendar, kind).await;

    let sent = match (&state.services.messenger, &state.services.user_phone) {
        (Some(messenger), Some(phone)) => {
            let (messenger, phone, text) = (Arc::clone(messenger), phone.clone(), message.clone());
            tokio::spawn(async move {
                if let Err(e) = messenger.send(&phone, &text).await {
                    tracing::warn!(error = %e, "briefing SMS failed");
                }
            });
            true
        },
        _ => false,
    };
    tracing::info!(briefing = %kind, sent, "briefing built");

    Ok(Json(BriefingResponse { briefing_type: kind.to_string(), message, sent }))
}
