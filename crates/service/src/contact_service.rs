use std::sync::Arc;

use chief_core::{
    Contact, DraftContext, Interaction, MAX_CONTACT_INTERACTIONS, RECENT_INTERACTIONS_SHOWN,
    ToneGuidelines,
};
use chief_storage::ContactStore;
use chrono::Utc;

use crate::error::ServiceError;

/// Contacts, interaction history and tone profiles.
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    user_id: String,
}

impl ContactService {
    #[must_use]
    pub fn new(store: Arc<dyn ContactStore>, user_id: String) -> Self {
        Self { store, user_id }
    }

    pub async fn add_contact(&self, mut contact: Contact) -> Result<Contact, ServiceError> {
        if contact.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("contact name is empty".to_owned()));
        }
        contact.updated_at = Utc::now();
        self.store.save_contact(&self.user_id, &contact).await?;
        tracing::info!(contact = %contact.name, "contact saved");
        Ok(contact)
    }

    pub async fn get_contact(&self, name: &str) -> Result<Contact, ServiceError> {
        self.store
            .get_contact(&self.user_id, name)
            .await?
            .ok_or_else(|| ServiceError::not_found("contact", name))
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.store.list_contacts(&self.user_id).await?)
    }

    /// Record an interaction, keeping the most recent ten.
    pub async fn log_interaction(
        &self,
        name: &str,
        interaction_type: &str,
        summary: &str,
        sentiment: Option<String>,
    ) -> Result<Contact, ServiceError> {
        let mut contact = self.get_contact(name).await?;
        contact.record_interaction(
            Interaction {
                date: Utc::now(),
                interaction_type: interaction_type.to_owned(),
                summary: summary.to_owned(),
                sentiment,
            },
            MAX_CONTACT_INTERACTIONS,
        );
        self.store.save_contact(&self.user_id, &contact).await?;
        Ok(contact)
    }

    pub async fn tone_guidelines(&self, name: &str) -> Result<ToneGuidelines, ServiceError> {
        let contact = self.get_contact(name).await?;
        Ok(tone_for(&contact))
    }

    pub async fn draft_context(
        &self,
        name: &str,
        topic: &str,
        message_type: &str,
    ) -> Result<DraftContext, ServiceError> {
        let contact = self.get_contact(name).await?;
        Ok(DraftContext {
            recipient: contact.name.clone(),
            recipient_role: contact.role.clone(),
            organization: contact.organization.clone(),
            topic: topic.to_owned(),
            message_type: message_type.to_owned(),
            tone: tone_for(&contact),
        })
    }

    /// Contacts whose name, organization or role contains `query`.
    pub async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, ServiceError> {
        let contacts = self.list_contacts().await?;
        Ok(contacts.into_iter().filter(|c| c.matches(query)).collect())
    }
}

fn tone_for(contact: &Contact) -> ToneGuidelines {
    let style = contact.communication_style;
    ToneGuidelines {
        contact: contact.name.clone(),
        role: contact.role.clone(),
        organization: contact.organization.clone(),
        style,
        style_description: style.description().to_owned(),
        guidelines: style.guidelines().to_owned(),
        notes: contact.notes.clone(),
        recent_interactions: contact.recent_interactions(RECENT_INTERACTIONS_SHOWN).to_vec(),
    }
}
