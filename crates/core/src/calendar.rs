//! Calendar events and their SMS-friendly rendering.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Start or end of an event: a timestamp, or a whole day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EventTime {
    DateTime {
        #[serde(rename = "dateTime")]
        date_time: DateTime<FixedOffset>,
    },
    Date {
        date: NaiveDate,
    },
}

impl EventTime {
    #[must_use]
    pub const fn is_all_day(&self) -> bool {
        matches!(self, Self::Date { .. })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::DateTime { date_time } => date_time.date_naive(),
            Self::Date { date } => *date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub start: EventTime,
    #[serde(default)]
    pub end: Option<EventTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to create a timed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub summary: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One bullet per event: `• 09:00 AM - Staff meeting @ Station 83`.
#[must_use]
pub fn format_events_for_display(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return "No events scheduled.".to_owned();
    }

    events
        .iter()
        .map(|event| {
            let when = match &event.start {
                EventTime::DateTime { date_time } => date_time.format("%I:%M %p").to_string(),
                EventTime::Date { .. } => "All day".to_owned(),
            };
            let summary = event.summary.as_deref().unwrap_or("No title");
            match event.location.as_deref().filter(|l| !l.is_empty()) {
                Some(location) => format!("• {when} - {summary} @ {location}"),
                None => format!("• {when} - {summary}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
