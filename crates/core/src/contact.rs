//! Contacts and the communication-style tone profiles used when drafting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    FormalAnalytical,
    ProfessionalCollaborative,
    DirectSupportive,
    #[default]
    ProfessionalDiplomatic,
    FormalControlled,
}

impl CommunicationStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FormalAnalytical => "formal_analytical",
            Self::ProfessionalCollaborative => "professional_collaborative",
            Self::DirectSupportive => "direct_supportive",
            Self::ProfessionalDiplomatic => "professional_diplomatic",
            Self::FormalControlled => "formal_controlled",
        }
    }

    /// Lenient parse: unknown styles fall back to professional diplomatic.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Who this style is meant for.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FormalAnalytical => "City Manager, Council - Data-driven, formal",
            Self::ProfessionalCollaborative => {
                "Union, Labor relations - Respectful, partnership-focused"
            }
            Self::DirectSupportive => "Staff, Direct reports - Clear, encouraging",
            Self::ProfessionalDiplomatic => {
                "External partners, Other agencies - Professional, bridge-building"
            }
            Self::FormalControlled => "Media, Public communications - Careful, on-message",
        }
    }

    #[must_use]
    pub const fn guidelines(self) -> &'static str {
        match self {
            Self::FormalAnalytical => {
                "Use data and metrics. Formal tone. Lead with ROI/impact. Avoid jargon."
            }
            Self::ProfessionalCollaborative => {
                "Acknowledge concerns. Reference CBA when relevant. Collaborative language."
            }
            Self::DirectSupportive => {
                "Be direct but supportive. Provide clear expectations. Recognize efforts."
            }
            Self::ProfessionalDiplomatic => {
                "Professional courtesy. Find common ground. Represent department well."
            }
            Self::FormalControlled => {
                "Stay on message. No speculation. Refer complex questions to PIO."
            }
        }
    }
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunicationStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formal_analytical" => Ok(Self::FormalAnalytical),
            "professional_collaborative" => Ok(Self::ProfessionalCollaborative),
            "direct_supportive" => Ok(Self::DirectSupportive),
            "professional_diplomatic" => Ok(Self::ProfessionalDiplomatic),
            "formal_controlled" => Ok(Self::FormalControlled),
            _ => Err(CoreError::invalid("communication style", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interaction {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub summary: String,
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub communication_style: CommunicationStyle,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    pub last_interaction: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        organization: impl Into<String>,
        communication_style: CommunicationStyle,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            organization: organization.into(),
            communication_style,
            email: None,
            phone: None,
            notes: None,
            interactions: Vec::new(),
            last_interaction: None,
            updated_at: Utc::now(),
        }
    }

    /// Append an interaction, keeping only the most recent `max`.
    pub fn record_interaction(&mut self, interaction: Interaction, max: usize) {
        self.last_interaction = Some(interaction.date);
        self.updated_at = interaction.date;
        self.interactions.push(interaction);
        if self.interactions.len() > max {
            let excess = self.interactions.len() - max;
            self.interactions.drain(..excess);
        }
    }

    /// The last `n` interactions, oldest first.
    #[must_use]
    pub fn recent_interactions(&self, n: usize) -> &[Interaction] {
        let start = self.interactions.len().saturating_sub(n);
        &self.interactions[start..]
    }

    /// Case-insensitive match against name, organization or role.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.organization.to_lowercase().contains(&q)
            || self.role.to_lowercase().contains(&q)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneGuidelines {
    pub contact: String,
    pub role: String,
    pub organization: String,
    pub style: CommunicationStyle,
    pub style_description: String,
    pub guidelines: String,
    pub notes: Option<String>,
    pub recent_interactions: Vec<Interaction>,
}

/// Everything a drafter needs to write to a contact about a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftContext {
    pub recipient: String,
    pub recipient_role: String,
    pub organization: String,
    pub topic: String,
    pub message_type: String,
    pub tone: ToneGuidelines,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(summary: &str) -> Interaction {
        Interaction {
            date: Utc::now(),
            interaction_type: "meeting".into(),
            summary: summary.into(),
            sentiment: None,
        }
    }

    #[test]
    fn interaction_history_is_bounded() {
        let mut contact =
            Contact::new("Dana Reyes", "City Manager", "City of Sunrise", CommunicationStyle::FormalAnalytical);
        for i in 0..12 {
            contact.record_interaction(interaction(&format!("call {i}")), 10);
        }
        assert_eq!(contact.interactions.len(), 10);
        assert_eq!(contact.interactions[0].summary, "call 2");
        assert_eq!(contact.recent_interactions(3)[2].summary, "call 11");
        assert!(contact.last_interaction.is_some());
    }

    #[test]
    fn unknown_style_falls_back_to_diplomatic() {
        assert_eq!(
            CommunicationStyle::from_str_lossy("casual"),
            CommunicationStyle::ProfessionalDiplomatic
        );
        assert_eq!(
            CommunicationStyle::from_str_lossy("Formal_Controlled"),
            CommunicationStyle::FormalControlled
        );
    }

    #[test]
    fn search_matches_role_and_org() {
        let contact = Contact::new(
            "Mike Torres",
            "Union President",
            "IAFF Local 2928",
            CommunicationStyle::ProfessionalCollaborative,
        );
        assert!(contact.matches("iaff"));
        assert!(contact.matches("president"));
        assert!(contact.matches("torres"));
        assert!(!contact.matches("council"));
    }
}
