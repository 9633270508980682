use anyhow::Result;
use chief_service::ServiceError;
use chief_service::seed::{SeedReport, seed_contacts, seed_credentials, seed_documents};

use crate::{load_services, print_json};

pub(crate) async fn run() -> Result<()> {
    let services = load_services()?;
    let documents = match seed_documents(&services.documents).await {
        Ok(reports) => reports,
        Err(ServiceError::NotConfigured(what)) => {
            tracing::warn!(%what, "skipping sample documents");
            Vec::new()
        },
        Err(e) => return Err(e.into()),
    };
    let report = SeedReport {
        documents,
        credentials: seed_credentials(&services.credentials).await?,
        contacts: seed_contacts(&services.contacts).await?,
    };
    print_json(&report)
}
