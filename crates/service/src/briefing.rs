//! Morning and end-of-day briefings.

use std::fmt;
use std::str::FromStr;

use chief_core::format_events_for_display;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarService;
use crate::error::ServiceError;

const CALENDAR_UNAVAILABLE: &str = "Calendar unavailable.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BriefingKind {
    #[default]
    Morning,
    #[serde(alias = "eod")]
    EndOfDay,
}

impl BriefingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::EndOfDay => "end-of-day",
        }
    }
}

impl fmt::Display for BriefingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BriefingKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "end-of-day" | "end_of_day" | "eod" => Ok(Self::EndOfDay),
            other => Err(ServiceError::InvalidInput(format!("unknown briefing type: {other}"))),
        }
    }
}

/// Render the briefing text around already formatted calendar lines.
#[must_use]
pub fn render_briefing(kind: BriefingKind, events_text: &str) -> String {
    match kind {
        BriefingKind::Morning => format!(
            "Good morning, Chief.\n\n📅 TODAY'S CALENDAR:\n{events_text}\n\nReply with any questions or 'note' to start taking notes."
        ),
        BriefingKind::EndOfDay => format!(
            "EOD Summary\n\n📅 TOMORROW'S PREVIEW:\n{events_text}\n\nAnything else to capture before end of day?"
        ),
    }
}

/// Build a briefing. A failing or missing calendar never blocks it.
pub async fn build_briefing(calendar: &CalendarService, kind: BriefingKind) -> String {
    let events = match kind {
        BriefingKind::Morning => calendar.todays_events().await,
        BriefingKind::EndOfDay => calendar.tomorrows_events().await,
    };
    let events_text = match events {
        Ok(events) => format_events_for_display(&events),
        Err(e) => {
            tracing::warn!(briefing = %kind, error = %e, "calendar unavailable for briefing");
            CALENDAR_UNAVAILABLE.to_owned()
        },
    };
    render_briefing(kind, &events_text)
}
