use std::sync::Arc;

use chief_core::{
    CeuProgress, CeuUpdate, Credential, EXPIRY_WARNING_DAYS, ExpiringCredential, Milestone,
    render_status_report,
};
use chief_storage::CredentialStore;
use chrono::{FixedOffset, NaiveDate, Utc};

use crate::error::ServiceError;

/// Professional credentials and their CEU requirements.
pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
    user_id: String,
    timezone: FixedOffset,
}

impl CredentialService {
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>, user_id: String, timezone: FixedOffset) -> Self {
        Self { store, user_id, timezone }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    /// Insert or replace a credential by name.
    pub async fn add_credential(&self, mut credential: Credential) -> Result<Credential, ServiceError> {
        if credential.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("credential name is empty".to_owned()));
        }
        credential.updated_at = Utc::now();
        self.store.save_credential(&self.user_id, &credential).await?;
        tracing::info!(credential = %credential.name, "credential saved");
        Ok(credential)
    }

    pub async fn get_credential(&self, name: &str) -> Result<Credential, ServiceError> {
        self.store
            .get_credential(&self.user_id, name)
            .await?
            .ok_or_else(|| ServiceError::not_found("credential", name))
    }

    pub async fn list_credentials(&self) -> Result<Vec<Credential>, ServiceError> {
        Ok(self.store.list_credentials(&self.user_id).await?)
    }

    /// Add earned CEU hours. Earned may run past required.
    pub async fn update_ceu(&self, name: &str, hours: u32) -> Result<CeuUpdate, ServiceError> {
        let mut credential = self.get_credential(name).await?;
        credential.ceu_earned = credential.ceu_earned.saturating_add(hours);
        credential.updated_at = Utc::now();
        self.store.save_credential(&self.user_id, &credential).await?;
        let update = CeuUpdate::from_credential(&credential);
        tracing::info!(credential = name, earned = update.earned, required = update.required, "CEU updated");
        Ok(update)
    }

    /// Progress for every credential that requires CEUs.
    pub async fn ceu_status(&self) -> Result<Vec<CeuProgress>, ServiceError> {
        let credentials = self.list_credentials().await?;
        Ok(ceu_progress(&credentials))
    }

    /// Credentials expiring within `days` from today.
    pub async fn get_expiring_soon(&self, days: i64) -> Result<Vec<ExpiringCredential>, ServiceError> {
        let credentials = self.list_credentials().await?;
        Ok(expiring_within(&credentials, self.today(), days))
    }

    pub async fn add_milestone(
        &self,
        name: &str,
        description: &str,
        date: Option<String>,
    ) -> Result<Credential, ServiceError> {
        if description.trim().is_empty() {
            return Err(ServiceError::InvalidInput("milestone description is empty".to_owned()));
        }
        let mut credential = self.get_credential(name).await?;
        let date = date.unwrap_or_else(|| self.today().format("%Y-%m-%d").to_string());
        credential.milestones.push(Milestone { description: description.trim().to_owned(), date });
        credential.updated_at = Utc::now();
        self.store.save_credential(&self.user_id, &credential).await?;
        Ok(credential)
    }

    pub async fn status_report(&self) -> Result<String, ServiceError> {
        let credentials = self.list_credentials().await?;
        let progress = ceu_progress(&credentials);
        let expiring = expiring_within(&credentials, self.today(), EXPIRY_WARNING_DAYS);
        Ok(render_status_report(&credentials, &progress, &expiring))
    }
}

fn ceu_progress(credentials: &[Credential]) -> Vec<CeuProgress> {
    credentials
        .iter()
        .filter(|c| c.ceu_required > 0)
        .map(CeuProgress::from_credential)
        .collect()
}

/// Credentials whose expiry is at most `days` after `today`, soonest first.
///
/// Missing, `none` and unparseable dates are skipped. Already expired
/// credentials are included with a negative day count.
#[must_use]
pub fn expiring_within(credentials: &[Credential], today: NaiveDate, days: i64) -> Vec<ExpiringCredential> {
    let mut expiring: Vec<ExpiringCredential> = credentials
        .iter()
        .filter_map(|c| {
            let expiration_date = c.expiration()?;
            let days_remaining = (expiration_date - today).num_days();
            (days_remaining <= days).then(|| ExpiringCredential {
                name: c.name.clone(),
                expiration_date,
                days_remaining,
                ceu_remaining: c.ceu_remaining(),
            })
        })
        .collect();
    expiring.sort_by_key(|e| e.days_remaining);
    expiring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cred(name: &str, expires: &str) -> Credential {
        let mut c = Credential::new(name, "license");
        c.expiration_date = Some(expires.to_owned());
        c
    }

    #[test]
    fn expiring_skips_unparseable_and_sorts_ascending() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let creds = vec![
            cred("LATE", "2026-03-01"),
            cred("NONE", "none"),
            cred("GARBAGE", "31/12/2026"),
            cred("SOON", "2026-01-15"),
            cred("FAR", "2027-06-01"),
        ];

        let result = expiring_within(&creds, today, 90);

        let names: Vec<_> = result.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["SOON", "LATE"]);
        assert_eq!(result[0].days_remaining, 14);
    }

    #[test]
    fn expiring_threshold_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let creds = vec![cred("EDGE", "2026-04-01")];
        assert_eq!(expiring_within(&creds, today, 90).len(), 1);
        assert!(expiring_within(&creds, today, 89).is_empty());
    }
}
