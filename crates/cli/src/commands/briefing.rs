use anyhow::{Context, Result};
use chief_service::{BriefingKind, build_briefing};

use crate::load_services;

pub(crate) async fn run(kind: &str, send: bool) -> Result<()> {
    let kind: BriefingKind = kind.parse()?;
    let services = load_services()?;
    let message = build_briefing(&services.calendar, kind).await;
    println!("{message}");

    if send {
        let messenger = services.messenger.as_ref().context("SMS is not configured")?;
        let phone = services.user_phone.as_deref().context("CHIEF_USER_PHONE is not set")?;
        messenger.send(phone, &message).await?;
        tracing::info!(%kind, "briefing sent");
    }
    Ok(())
}
