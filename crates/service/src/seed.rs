//! Sample records for a fresh installation.

use chief_core::{CommunicationStyle, Contact, Credential, CredentialStatus, IndexReport};
use serde::Serialize;

use crate::contact_service::ContactService;
use crate::credential_service::CredentialService;
use crate::document_service::DocumentService;
use crate::error::ServiceError;

pub const CBA_TEXT: &str = "COLLECTIVE BARGAINING AGREEMENT
Between City of Sunrise and IAFF Local 2928

ARTICLE 12 - OVERTIME
Section 12.1 - Overtime shall be compensated at one and one-half times the regular rate.
Section 12.2 - Overtime shall be distributed equitably among qualified employees.
Section 12.3 - Employees may bank overtime as compensatory time up to 480 hours.
Section 12.4 - Mandatory overtime shall be assigned by inverse seniority.

ARTICLE 15 - LEAVE
Section 15.1 - Annual leave accrual: 0-5 years: 8 hours/month, 5-10 years: 10 hours/month.
Section 15.2 - Sick leave accrual: 8 hours per month for all employees.
Section 15.3 - Kelly Day schedule shall provide one additional day off per 9-day cycle.";

pub const CRR_SOP_TEXT: &str = "STANDARD OPERATING PROCEDURE: Community Risk Reduction
SOP Number: CRR-001
Effective Date: January 1, 2025

PURPOSE: Establish procedures for community risk reduction activities.

SCOPE: All personnel assigned to the CRR Division.

PROCEDURE:
1. Risk Assessment - Conduct annual community risk assessment using NFPA 1730 standards.
2. Home Safety Visits - Complete minimum 50 home safety visits per month.
3. Public Education - Deliver fire safety education to all elementary schools quarterly.
4. Smoke Alarm Program - Install smoke alarms in at-risk residences upon request.
5. Data Collection - Document all activities in the CRR database within 24 hours.

REPORTING: Monthly reports due to Division Chief by the 5th of each month.";

pub const DRONE_POLICY_TEXT: &str = "CITY OF SUNRISE ADMINISTRATIVE POLICY
Policy: AP-2024-15 - Drone Operations

The City of Sunrise authorizes the use of unmanned aerial systems (drones) for:
1. Search and rescue operations
2. Fire scene documentation
3. Damage assessment following disasters
4. Training exercises

All drone operators must maintain FAA Part 107 certification.
Flight logs must be maintained and submitted monthly.
Drones shall not be operated within 5 miles of FLL without FAA authorization.";

/// `(title, doc_type, content)` for each sample document.
pub const SAMPLE_DOCUMENTS: [(&str, &str, &str); 3] = [
    ("IAFF Local 2928 CBA", "cba", CBA_TEXT),
    ("CRR Division SOP", "sop", CRR_SOP_TEXT),
    ("Drone Operations Policy", "policy", DRONE_POLICY_TEXT),
];

#[derive(Debug, Default, Serialize)]
pub struct SeedReport {
    pub documents: Vec<IndexReport>,
    pub credentials: usize,
    pub contacts: usize,
}

pub async fn seed_documents(documents: &DocumentService) -> Result<Vec<IndexReport>, ServiceError> {
    let mut reports = Vec::with_capacity(SAMPLE_DOCUMENTS.len());
    for (title, doc_type, content) in SAMPLE_DOCUMENTS {
        let report = documents.add_document(title, content, doc_type, None).await?;
        tracing::info!(doc_id = %report.doc_id, title, chunks = report.chunks, "seeded document");
        reports.push(report);
    }
    Ok(reports)
}

pub async fn seed_credentials(credentials: &CredentialService) -> Result<usize, ServiceError> {
    let mut efo = Credential::new("Executive Fire Officer", "certification");
    efo.status = CredentialStatus::InProgress;
    efo.issuing_body = Some("National Fire Academy".to_owned());
    credentials.add_credential(efo).await?;
    credentials
        .add_milestone("Executive Fire Officer", "EFO I - Complete", Some("2024-06-15".to_owned()))
        .await?;

    let mut emt = Credential::new("EMT-P", "license");
    emt.expiration_date = Some("2026-03-31".to_owned());
    emt.ceu_required = 40;
    emt.ceu_earned = 28;
    emt.issuing_body = Some("Florida DOH".to_owned());
    credentials.add_credential(emt).await?;

    Ok(2)
}

pub async fn seed_contacts(contacts: &ContactService) -> Result<usize, ServiceError> {
    let samples = [
        (
            "City Manager",
            "City Manager",
            "City of Sunrise",
            CommunicationStyle::FormalAnalytical,
            "Prefers data-driven presentations. Focus on ROI and community impact.",
        ),
        (
            "Fire Chief",
            "Fire Chief",
            "Sunrise Fire-Rescue",
            CommunicationStyle::DirectSupportive,
            "Direct report. Weekly 1:1s on Mondays.",
        ),
        (
            "Union President",
            "IAFF Local President",
            "IAFF Local 2928",
            CommunicationStyle::ProfessionalCollaborative,
            "Good working relationship. Reference CBA Article 12 for scheduling issues.",
        ),
        (
            "Broward EOC Director",
            "Emergency Management Director",
            "Broward County EOC",
            CommunicationStyle::ProfessionalDiplomatic,
            "Key partner for mutual aid and hurricane response.",
        ),
        (
            "UCF Advisor",
            "PhD Program Advisor",
            "UCF",
            CommunicationStyle::ProfessionalDiplomatic,
            "Dissertation committee. Research focus on emergency management.",
        ),
        (
            "FTFC Chair",
            "Conference Chair",
            "First There First Care",
            CommunicationStyle::ProfessionalCollaborative,
            "2026 conference planning. Monthly planning calls.",
        ),
    ];

    for (name, role, organization, style, notes) in samples {
        let mut contact = Contact::new(name, role, organization, style);
        contact.notes = Some(notes.to_owned());
        contacts.add_contact(contact).await?;
    }
    Ok(samples.len())
}
