use anyhow::Result;
use chief_core::{Credential, CredentialStatus};
use clap::Subcommand;

use crate::{load_services, print_json};

#[derive(Subcommand)]
pub(crate) enum CredsCommand {
    List,
    Show { name: String },
    Add {
        name: String,
        #[arg(short = 't', long, default_value = "certification")]
        credential_type: String,
        #[arg(short, long, default_value = "active")]
        status: CredentialStatus,
        /// YYYY-MM-DD
        #[arg(short, long)]
        expires: Option<String>,
        #[arg(long, default_value = "0")]
        ceu_required: u32,
        #[arg(long)]
        issuer: Option<String>,
    },
    /// Log continuing-education hours
    Ceu { name: String, hours: u32 },
    Milestone {
        name: String,
        description: String,
        /// Defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    Expiring {
        #[arg(short, long, default_value = "90")]
        days: i64,
    },
    /// CEU progress for credentials that require hours
    Progress,
    Report,
}

pub(crate) async fn run(command: CredsCommand) -> Result<()> {
    let credentials = load_services()?.credentials;
    match command {
        CredsCommand::List => print_json(&credentials.list_credentials().await?),
        CredsCommand::Show { name } => print_json(&credentials.get_credential(&name).await?),
        CredsCommand::Add { name, credential_type, status, expires, ceu_required, issuer } => {
            let mut credential = Credential::new(name, credential_type);
            credential.status = status;
            credential.expiration_date = expires;
            credential.ceu_required = ceu_required;
            credential.issuing_body = issuer;
            print_json(&credentials.add_credential(credential).await?)
        },
        CredsCommand::Ceu { name, hours } => print_json(&credentials.update_ceu(&name, hours).await?),
        CredsCommand::Milestone { name, description, date } => {
            print_json(&credentials.add_milestone(&name, &description, date).await?)
        },
        CredsCommand::Expiring { days } => print_json(&credentials.get_expiring_soon(days).await?),
        CredsCommand::Progress => print_json(&credentials.ceu_status().await?),
        CredsCommand::Report => {
            println!("{}", credentials.status_report().await?);
            Ok(())
        },
    }
}
