//! Professional credentials and continuing-education (CEU) arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    #[default]
    Active,
    InProgress,
    Expired,
    Lapsed,
}

impl CredentialStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProgress => "in_progress",
            Self::Expired => "expired",
            Self::Lapsed => "lapsed",
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "active" => Ok(Self::Active),
            "in_progress" => Ok(Self::InProgress),
            "expired" => Ok(Self::Expired),
            "lapsed" => Ok(Self::Lapsed),
            _ => Err(CoreError::invalid("credential status", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub description: String,
    pub date: String,
}

/// A license, certification or degree being tracked.
///
/// `expiration_date` is kept as the raw string it was entered with; it may be
/// `"none"` or malformed, in which case [`Credential::days_until_expiry`]
/// yields `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    pub credential_type: String,
    pub status: CredentialStatus,
    pub expiration_date: Option<String>,
    pub ceu_required: u32,
    pub ceu_earned: u32,
    pub issuing_body: Option<String>,
    pub credential_number: Option<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    #[must_use]
    pub fn new(name: impl Into<String>, credential_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credential_type: credential_type.into(),
            status: CredentialStatus::Active,
            expiration_date: None,
            ceu_required: 0,
            ceu_earned: 0,
            issuing_body: None,
            credential_number: None,
            milestones: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn ceu_remaining(&self) -> u32 {
        self.ceu_required.saturating_sub(self.ceu_earned)
    }

    /// Whole-percent progress, capped at 100. Zero when nothing is required.
    #[must_use]
    pub fn ceu_percent(&self) -> u32 {
        ceu_percent(self.ceu_earned, self.ceu_required)
    }

    #[must_use]
    pub fn expiration(&self) -> Option<NaiveDate> {
        self.expiration_date.as_deref().and_then(parse_expiration)
    }

    /// Days from `today` to expiry; negative once expired.
    #[must_use]
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiration().map(|exp| (exp - today).num_days())
    }
}

/// `floor(100 * earned / required)` capped at 100.
#[must_use]
pub fn ceu_percent(earned: u32, required: u32) -> u32 {
    if required == 0 {
        return 0;
    }
    let pct = u64::from(earned) * 100 / u64::from(required);
    u32::try_from(pct.min(100)).unwrap_or(100)
}

/// Parse a `YYYY-MM-DD` expiration, treating `none`, blanks and garbage as absent.
#[must_use]
pub fn parse_expiration(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Storage key for a credential or contact name: upper-cased, spaces to `_`.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.trim().to_uppercase().replace(' ', "_")
}

/// Result of adding CEU hours to a credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CeuUpdate {
    pub credential: String,
    pub earned: u32,
    pub required: u32,
    pub remaining: u32,
    pub complete: bool,
}

impl CeuUpdate {
    #[must_use]
    pub fn from_credential(credential: &Credential) -> Self {
        Self {
            credential: credential.name.clone(),
            earned: credential.ceu_earned,
            required: credential.ceu_required,
            remaining: credential.ceu_remaining(),
            complete: credential.ceu_earned >= credential.ceu_required,
        }
    }
}

/// One row of the CEU progress overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CeuProgress {
    pub credential: String,
    pub earned: u32,
    pub required: u32,
    pub remaining: u32,
    pub percent: u32,
}

impl CeuProgress {
    #[must_use]
    pub fn from_credential(credential: &Credential) -> Self {
        Self {
            credential: credential.name.clone(),
            earned: credential.ceu_earned,
            required: credential.ceu_required,
            remaining: credential.ceu_remaining(),
            percent: credential.ceu_percent(),
        }
    }

    /// Ten-cell progress bar, one `#` per full 10%.
    #[must_use]
    pub fn bar(&self) -> String {
        let filled = (self.percent / 10).min(10) as usize;
        format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiringCredential {
    pub name: String,
    pub expiration_date: NaiveDate,
    pub days_remaining: i64,
    pub ceu_remaining: u32,
}

/// Plain-text overview of every tracked credential.
#[must_use]
pub fn render_status_report(
    credentials: &[Credential],
    progress: &[CeuProgress],
    expiring: &[ExpiringCredential],
) -> String {
    let active = credentials.iter().filter(|c| c.status == CredentialStatus::Active).count();
    let in_progress =
        credentials.iter().filter(|c| c.status == CredentialStatus::InProgress).count();

    let mut lines = vec![
        "PROFESSIONAL DEVELOPMENT STATUS".to_owned(),
        "=".repeat(35),
        format!("Active Credentials: {active}"),
        format!("In Progress: {in_progress}"),
        String::new(),
        "CEU PROGRESS:".to_owned(),
    ];
    for p in progress {
        lines.push(format!("  {}: [{}] {}/{}", p.credential, p.bar(), p.earned, p.required));
    }

    if !expiring.is_empty() {
        lines.push(String::new());
        lines.push("EXPIRING SOON:".to_owned());
        for e in expiring.iter().take(3) {
            lines.push(format!("  - {}: {} days", e.name, e.days_remaining));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emt_p() -> Credential {
        let mut cred = Credential::new("EMT-P", "license");
        cred.expiration_date = Some("2026-03-31".into());
        cred.ceu_required = 40;
        cred.ceu_earned = 28;
        cred
    }

    #[test]
    fn ceu_percent_floors_and_caps() {
        assert_eq!(ceu_percent(28, 40), 70);
        assert_eq!(ceu_percent(45, 40), 100);
        assert_eq!(ceu_percent(1, 3), 33);
        assert_eq!(ceu_percent(5, 0), 0);
    }

    #[test]
    fn remaining_never_negative() {
        let mut cred = emt_p();
        assert_eq!(cred.ceu_remaining(), 12);
        cred.ceu_earned = 50;
        assert_eq!(cred.ceu_remaining(), 0);
    }

    #[test]
    fn expiration_parsing_skips_none_and_garbage() {
        assert!(parse_expiration("none").is_none());
        assert!(parse_expiration("NONE").is_none());
        assert!(parse_expiration("03/31/2026").is_none());
        assert!(parse_expiration("").is_none());
        assert_eq!(parse_expiration("2026-03-31"), NaiveDate::from_ymd_opt(2026, 3, 31));
    }

    #[test]
    fn days_until_expiry_counts_calendar_days() {
        let cred = emt_p();
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(cred.days_until_expiry(today), Some(30));
    }

    #[test]
    fn key_normalization() {
        assert_eq!(normalize_key("Fire Officer III"), "FIRE_OFFICER_III");
        assert_eq!(normalize_key("emt-p"), "EMT-P");
    }

    #[test]
    fn ceu_update_after_adding_hours() {
        let mut cred = emt_p();
        cred.ceu_earned += 4;
        let update = CeuUpdate::from_credential(&cred);
        assert_eq!(update.earned, 32);
        assert_eq!(update.required, 40);
        assert_eq!(update.remaining, 8);
        assert!(!update.complete);
    }

    #[test]
    fn report_lists_bars_and_expiring() {
        let cred = emt_p();
        let progress = vec![CeuProgress::from_credential(&cred)];
        let expiring = vec![ExpiringCredential {
            name: "EMT-P".into(),
            expiration_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            days_remaining: 30,
            ceu_remaining: 12,
        }];
        let report = render_status_report(&[cred], &progress, &expiring);
        assert!(report.starts_with("PROFESSIONAL DEVELOPMENT STATUS"));
        assert!(report.contains("Active Credentials: 1"));
        assert!(report.contains("  EMT-P: [#######---] 28/40"));
        assert!(report.contains("  - EMT-P: 30 days"));
    }
}
