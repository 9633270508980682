//! Key layout of the item table.
//!
//! | entity     | pk                 | sk                 | gsi1pk            | gsi1sk            |
//! |------------|--------------------|--------------------|-------------------|-------------------|
//! | session    | `SESSION#{id}`     | `META`             |                   |                   |
//! | action     | `ACTION#{id}`      | `USER#{user}`      | `STATUS#{status}` | `DUE#{date/none}` |
//! | credential | `USER#{user}`      | `CRED#{KEY}`       | `TYPE#{type}`     | `EXP#{date/none}` |
//! | contact    | `USER#{user}`      | `CONTACT#{KEY}`    |                   |                   |
//! | document   | `DOC#{id}`         | `META`             | `TYPE#{doc_type}` | `DATE#{yyyy-mm-dd}` |

use chief_core::{ActionStatus, normalize_key};

pub const META: &str = "META";
pub const SESSION_PREFIX: &str = "SESSION#";
pub const ACTION_PREFIX: &str = "ACTION#";
pub const DOC_PREFIX: &str = "DOC#";
pub const CRED_PREFIX: &str = "CRED#";
pub const CONTACT_PREFIX: &str = "CONTACT#";

#[must_use]
pub fn session_pk(id: &str) -> String {
    format!("{SESSION_PREFIX}{id}")
}

#[must_use]
pub fn action_pk(id: &str) -> String {
    format!("{ACTION_PREFIX}{id}")
}

#[must_use]
pub fn user_pk(user_id: &str) -> String {
    format!("USER#{user_id}")
}

#[must_use]
pub fn status_gsi(status: ActionStatus) -> String {
    format!("STATUS#{}", status.as_str())
}

#[must_use]
pub fn due_gsi(due_date: Option<&str>) -> String {
    format!("DUE#{}", due_date.unwrap_or("none"))
}

#[must_use]
pub fn credential_sk(name: &str) -> String {
    format!("{CRED_PREFIX}{}", normalize_key(name))
}

#[must_use]
pub fn contact_sk(name: &str) -> String {
    format!("{CONTACT_PREFIX}{}", normalize_key(name))
}

#[must_use]
pub fn type_gsi(kind: &str) -> String {
    format!("TYPE#{kind}")
}

#[must_use]
pub fn expiry_gsi(expiration: Option<&str>) -> String {
    format!("EXP#{}", expiration.unwrap_or("none"))
}

#[must_use]
pub fn doc_pk(id: &str) -> String {
    format!("{DOC_PREFIX}{id}")
}

#[must_use]
pub fn date_gsi(date: &str) -> String {
    format!("DATE#{date}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_keys_are_normalized() {
        assert_eq!(credential_sk("Fire Officer III"), "CRED#FIRE_OFFICER_III");
        assert_eq!(contact_sk("dana reyes"), "CONTACT#DANA_REYES");
    }

    #[test]
    fn missing_dates_use_none() {
        assert_eq!(due_gsi(None), "DUE#none");
        assert_eq!(expiry_gsi(Some("2026-03-31")), "EXP#2026-03-31");
        assert_eq!(status_gsi(ActionStatus::Pending), "STATUS#pending");
    }
}
