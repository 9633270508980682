use chief_core::{CommunicationStyle, Contact, Credential};
use chrono::{Days, Utc};

use super::create_test_services;
use crate::seed::{seed_contacts, seed_credentials};

#[tokio::test]
async fn adding_ceu_hours_reports_progress() {
    let t = create_test_services(&[]);
    seed_credentials(&t.services.credentials).await.unwrap();

    let update = t.services.credentials.update_ceu("EMT-P", 4).await.unwrap();

    assert_eq!(update.earned, 32);
    assert_eq!(update.required, 40);
    assert_eq!(update.remaining, 8);
    assert!(!update.complete);
    assert_eq!(t.services.credentials.get_credential("emt-p").await.unwrap().ceu_earned, 32);
}

#[tokio::test]
async fn earned_hours_may_exceed_required() {
    let t = create_test_services(&[]);
    seed_credentials(&t.services.credentials).await.unwrap();

    let update = t.services.credentials.update_ceu("EMT-P", 17).await.unwrap();
    let status = t.services.credentials.ceu_status().await.unwrap();

    assert_eq!(update.earned, 45);
    assert_eq!(update.remaining, 0);
    assert!(update.complete);
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].percent, 100);
}

#[tokio::test]
async fn status_report_counts_and_bars() {
    let t = create_test_services(&[]);
    seed_credentials(&t.services.credentials).await.unwrap();

    let report = t.services.credentials.status_report().await.unwrap();

    assert!(report.starts_with("PROFESSIONAL DEVELOPMENT STATUS"));
    assert!(report.contains("Active Credentials: 1"));
    assert!(report.contains("In Progress: 1"));
    assert!(report.contains("EMT-P: [#######---] 28/40"));
}

#[tokio::test]
async fn milestones_append_and_unknown_credentials_are_not_found() {
    let t = create_test_services(&[]);
    seed_credentials(&t.services.credentials).await.unwrap();

    let efo = t
        .services
        .credentials
        .add_milestone("Executive Fire Officer", "EFO II - Applied Research", None)
        .await
        .unwrap();

    assert_eq!(efo.milestones.len(), 2);
    assert_eq!(efo.milestones[0].date, "2024-06-15");
    assert!(t.services.credentials.update_ceu("Paramedic II", 1).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn expiring_soon_uses_today() {
    let t = create_test_services(&[]);
    let today = Utc::now().date_naive();
    for (name, expires) in [
        ("SOON", (today + Days::new(30)).format("%Y-%m-%d").to_string()),
        ("FAR", (today + Days::new(200)).format("%Y-%m-%d").to_string()),
        ("NEVER", "none".to_owned()),
    ] {
        let mut c = Credential::new(name, "license");
        c.expiration_date = Some(expires);
        t.services.credentials.add_credential(c).await.unwrap();
    }

    let expiring = t.services.credentials.get_expiring_soon(90).await.unwrap();

    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].name, "SOON");
}

#[tokio::test]
async fn interactions_keep_the_latest_ten() {
    let t = create_test_services(&[]);
    seed_contacts(&t.services.contacts).await.unwrap();

    for i in 0..12 {
        t.services
            .contacts
            .log_interaction("Union President", "meeting", &format!("meeting {i}"), None)
            .await
            .unwrap();
    }

    let contact = t.services.contacts.get_contact("union president").await.unwrap();
    assert_eq!(contact.interactions.len(), 10);
    assert_eq!(contact.interactions[0].summary, "meeting 2");
    assert!(contact.last_interaction.is_some());

    let tone = t.services.contacts.tone_guidelines("Union President").await.unwrap();
    assert_eq!(tone.style, CommunicationStyle::ProfessionalCollaborative);
    assert_eq!(tone.recent_interactions.len(), 3);
    assert_eq!(tone.recent_interactions[2].summary, "meeting 11");
}

#[tokio::test]
async fn draft_context_and_search() {
    let t = create_test_services(&[]);
    let count = seed_contacts(&t.services.contacts).await.unwrap();
    assert_eq!(count, 6);

    let draft = t
        .services
        .contacts
        .draft_context("City Manager", "FY27 CRR budget", "email")
        .await
        .unwrap();
    let sunrise = t.services.contacts.search_contacts("sunrise").await.unwrap();
    let advisors = t.services.contacts.search_contacts("ADVISOR").await.unwrap();

    assert_eq!(draft.organization, "City of Sunrise");
    assert_eq!(draft.tone.style, CommunicationStyle::FormalAnalytical);
    assert_eq!(draft.topic, "FY27 CRR budget");
    assert_eq!(sunrise.len(), 2);
    assert_eq!(advisors.len(), 1);
    assert!(t.services.contacts.tone_guidelines("Nobody").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn blank_contact_name_is_rejected() {
    let t = create_test_services(&[]);
    let err = t
        .services
        .contacts
        .add_contact(Contact::new("  ", "role", "org", CommunicationStyle::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, crate::ServiceError::InvalidInput(_)));
}
