use std::sync::Arc;

use anyhow::Result;
use chief_http::{AppState, create_router};

use crate::load_services;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let services = load_services()?;
    if services.messenger.is_none() {
        tracing::warn!("SMS is not configured, webhook replies will not be delivered");
    }

    let state = Arc::new(AppState::new(services));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
