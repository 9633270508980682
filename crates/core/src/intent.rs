//! Coarse intent classification of inbound messages.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CalendarQuery,
    CalendarCreate,
    CalendarModify,
    NoteStart,
    NoteAdd,
    NoteEnd,
    Briefing,
    Conversation,
}

impl Intent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CalendarQuery => "calendar_query",
            Self::CalendarCreate => "calendar_create",
            Self::CalendarModify => "calendar_modify",
            Self::NoteStart => "note_start",
            Self::NoteAdd => "note_add",
            Self::NoteEnd => "note_end",
            Self::Briefing => "briefing",
            Self::Conversation => "conversation",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CALENDAR_WORDS: &[&str] = &["calendar", "schedule", "meeting", "event", "free", "busy", "block"];
const CALENDAR_QUERY_WORDS: &[&str] = &["what", "show", "today", "tomorrow", "week"];
const CALENDAR_CREATE_WORDS: &[&str] = &["schedule", "create", "add", "block"];
const CALENDAR_MODIFY_WORDS: &[&str] = &["move", "reschedule", "cancel"];

const NOTE_WORDS: &[&str] = &["note", "taking notes", "remember", "action item"];
const NOTE_START_WORDS: &[&str] = &["start", "taking", "begin"];
const NOTE_END_WORDS: &[&str] = &["done", "end", "stop", "finish"];

const BRIEFING_WORDS: &[&str] = &["brief", "summary", "status", "update"];

fn any_of(lowered: &str, words: &[&str]) -> bool {
    words.iter().any(|w| lowered.contains(w))
}

/// Map free text to an [`Intent`].
///
/// Groups are tested in order (calendar, notes, briefing) and the first
/// matching group wins. A calendar message that matches none of the
/// query/create/modify sub-groups is treated as a query.
#[must_use]
pub fn classify_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();

    if any_of(&lowered, CALENDAR_WORDS) {
        if any_of(&lowered, CALENDAR_QUERY_WORDS) {
            return Intent::CalendarQuery;
        }
        if any_of(&lowered, CALENDAR_CREATE_WORDS) {
            return Intent::CalendarCreate;
        }
        if any_of(&lowered, CALENDAR_MODIFY_WORDS) {
            return Intent::CalendarModify;
        }
        return Intent::CalendarQuery;
    }

    if any_of(&lowered, NOTE_WORDS) {
        if any_of(&lowered, NOTE_START_WORDS) {
            return Intent::NoteStart;
        }
        if any_of(&lowered, NOTE_END_WORDS) {
            return Intent::NoteEnd;
        }
        return Intent::NoteAdd;
    }

    if any_of(&lowered, BRIEFING_WORDS) {
        return Intent::Briefing;
    }

    Intent::Conversation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_sub_intents() {
        assert_eq!(classify_intent("What's on my calendar today?"), Intent::CalendarQuery);
        assert_eq!(classify_intent("Create a meeting with the union"), Intent::CalendarCreate);
        assert_eq!(classify_intent("Please reschedule the meeting"), Intent::CalendarModify);
    }

    #[test]
    fn calendar_without_sub_intent_defaults_to_query() {
        assert_eq!(classify_intent("calendar"), Intent::CalendarQuery);
    }

    #[test]
    fn schedule_is_both_group_and_create_word() {
        assert_eq!(classify_intent("schedule lunch with Dana"), Intent::CalendarCreate);
    }

    #[test]
    fn note_sub_intents() {
        assert_eq!(classify_intent("Start taking notes"), Intent::NoteStart);
        assert_eq!(classify_intent("done with notes"), Intent::NoteEnd);
        assert_eq!(classify_intent("note: Chief Lopez owes the budget memo"), Intent::NoteAdd);
        assert_eq!(classify_intent("remember to call the vendor"), Intent::NoteAdd);
    }

    #[test]
    fn briefing_and_conversation() {
        assert_eq!(classify_intent("give me a brief"), Intent::Briefing);
        assert_eq!(classify_intent("status?"), Intent::Briefing);
        assert_eq!(classify_intent("how do I word this email"), Intent::Conversation);
    }

    #[test]
    fn calendar_wins_over_notes() {
        assert_eq!(classify_intent("note the meeting today"), Intent::CalendarQuery);
    }
}
