//! Request bodies, query strings and response shapes.

use chief_core::{
    CommunicationStyle, Contact, Credential, CredentialStatus, EXPIRY_WARNING_DAYS, InputType,
    Priority, Reply, Workspace,
};
use serde::{Deserialize, Serialize};

const fn default_expiry_days() -> i64 {
    EXPIRY_WARNING_DAYS
}

const fn default_upcoming_days() -> u32 {
    7
}

const fn default_free_days() -> u32 {
    14
}

fn default_message_type() -> String {
    "email".to_owned()
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub conversation_id: String,
    #[serde(flatten)]
    pub reply: Reply,
}

/// Twilio inbound message webhook form.
#[derive(Debug, Deserialize)]
pub struct SmsForm {
    #[serde(rename = "From", default)]
    pub from: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct BriefingRequest {
    pub briefing_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BriefingResponse {
    pub briefing_type: String,
    pub message: String,
    pub sent: bool,
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub title: String,
    /// Classified from the title when absent.
    pub workspace: Option<Workspace>,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    pub content: String,
    #[serde(default)]
    pub input_type: InputType,
}

#[derive(Debug, Deserialize)]
pub struct AddActionRequest {
    pub description: String,
    pub workspace: Option<Workspace>,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    pub name: String,
    pub credential_type: String,
    #[serde(default)]
    pub status: CredentialStatus,
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub ceu_required: u32,
    #[serde(default)]
    pub ceu_earned: u32,
    pub issuing_body: Option<String>,
    pub credential_number: Option<String>,
}

impl From<CredentialRequest> for Credential {
    fn from(req: CredentialRequest) -> Self {
        let mut credential = Self::new(req.name, req.credential_type);
        credential.status = req.status;
        credential.expiration_date = req.expiration_date;
        credential.ceu_required = req.ceu_required;
        credential.ceu_earned = req.ceu_earned;
        credential.issuing_body = req.issuing_body;
        credential.credential_number = req.credential_number;
        credential
    }
}

#[derive(Debug, Deserialize)]
pub struct CeuRequest {
    pub hours: u32,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneRequest {
    pub description: String,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    #[serde(default = "default_expiry_days")]
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub role: String,
    pub organization: String,
    /// Unknown styles fall back to professional diplomatic.
    pub communication_style: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl From<ContactRequest> for Contact {
    fn from(req: ContactRequest) -> Self {
        let style = req
            .communication_style
            .as_deref()
            .map_or_else(CommunicationStyle::default, CommunicationStyle::from_str_lossy);
        let mut contact = Self::new(req.name, req.role, req.organization, style);
        contact.email = req.email;
        contact.phone = req.phone;
        contact.notes = req.notes;
        contact
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionRequest {
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub summary: String,
    pub sentiment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub topic: String,
    #[serde(default = "default_message_type")]
    pub message_type: String,
}

#[derive(Debug, Deserialize)]
pub struct AddDocumentRequest {
    pub title: String,
    pub content: String,
    pub doc_type: String,
    pub source_file: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocTypeQuery {
    pub doc_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentSearchQuery {
    #[serde(default)]
    pub q: String,
    pub doc_type: Option<String>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ReindexRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    pub doc_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct FreeDaysQuery {
    #[serde(default = "default_free_days")]
    pub days: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    #[serde(default = "default_upcoming_days")]
    pub days: u32,
}
