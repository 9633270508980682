//! Workspaces and the keyword classifier that assigns one to free text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the five life/work domains a request belongs to.
///
/// Variants are declared in priority order; `Command` is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Workspace {
    Command,
    #[default]
    Operations,
    Planning,
    Logistics,
    Personal,
}

impl Workspace {
    pub const ALL: [Self; 5] =
        [Self::Command, Self::Operations, Self::Planning, Self::Logistics, Self::Personal];

    /// Static priority, 1 is highest.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Command => 1,
            Self::Operations => 2,
            Self::Planning => 3,
            Self::Logistics => 4,
            Self::Personal => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Operations => "operations",
            Self::Planning => "planning",
            Self::Logistics => "logistics",
            Self::Personal => "personal",
        }
    }

    /// Lower-case keywords whose presence places text in this workspace.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Command => &[
                "city manager",
                "council",
                "union",
                "cba",
                "policy",
                "strategic",
                "budget approval",
                "commission",
            ],
            Self::Operations => &[
                "sunrise",
                "station",
                "crr",
                "mih",
                "everbridge",
                "shift",
                "response",
                "apparatus",
                "overtime",
            ],
            Self::Planning => &[
                "efo",
                "phd",
                "dissertation",
                "paper",
                "class",
                "ucf",
                "nfa",
                "leadership broward",
                "research",
            ],
            Self::Logistics => &[
                "conference",
                "ftfc",
                "eagles",
                "speakers",
                "sponsors",
                "vendor",
                "procurement",
            ],
            Self::Personal => &["family", "kids", "home", "personal", "vacation", "appointment"],
        }
    }

    /// Short description used in the assistant's system prompt.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Command => "City manager, council, union, strategic policy",
            Self::Operations => "Sunrise Fire-Rescue daily operations, CRR, MIH",
            Self::Planning => "Academic work, EFO, PhD, research",
            Self::Logistics => "Conference planning, vendors, procurement",
            Self::Personal => "Family, personal appointments",
        }
    }

    fn matches(self, lowered: &str) -> bool {
        self.keywords().iter().any(|kw| lowered.contains(kw))
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workspace {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::invalid("workspace", s))
    }
}

/// Assign exactly one workspace to `text`.
///
/// Every workspace with at least one keyword present (case-insensitive
/// substring) is a candidate; the candidate with the lowest priority number
/// wins, ties resolved by declaration order. Text matching nothing lands in
/// [`Workspace::Operations`].
#[must_use]
pub fn classify_workspace(text: &str) -> Workspace {
    let lowered = text.to_lowercase();
    Workspace::ALL
        .into_iter()
        .filter(|w| w.matches(&lowered))
        .min_by_key(|w| w.priority())
        .unwrap_or_default()
}
