use anyhow::Result;
use chief_core::{CommunicationStyle, Contact};
use clap::Subcommand;

use crate::{load_services, print_json};

#[derive(Subcommand)]
pub(crate) enum ContactsCommand {
    List,
    Show { name: String },
    Add {
        name: String,
        #[arg(short, long)]
        role: String,
        #[arg(short, long)]
        organization: String,
        #[arg(short, long, default_value = "professional_diplomatic")]
        style: CommunicationStyle,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Match on name, organization or role
    Search { query: String },
    Log {
        name: String,
        summary: String,
        #[arg(short = 't', long, default_value = "meeting")]
        interaction_type: String,
        #[arg(long)]
        sentiment: Option<String>,
    },
    /// Tone guidelines for writing to a contact
    Tone { name: String },
    /// Context for drafting a message
    Draft {
        name: String,
        topic: String,
        #[arg(short = 't', long, default_value = "email")]
        message_type: String,
    },
}

pub(crate) async fn run(command: ContactsCommand) -> Result<()> {
    let contacts = load_services()?.contacts;
    match command {
        ContactsCommand::List => print_json(&contacts.list_contacts().await?),
        ContactsCommand::Show { name } => print_json(&contacts.get_contact(&name).await?),
        ContactsCommand::Add { name, role, organization, style, notes } => {
            let mut contact = Contact::new(name, role, organization, style);
            contact.notes = notes;
            print_json(&contacts.add_contact(contact).await?)
        },
        ContactsCommand::Search { query } => print_json(&contacts.search_contacts(&query).await?),
        ContactsCommand::Log { name, summary, interaction_type, sentiment } => {
            print_json(&contacts.log_interaction(&name, &interaction_type, &summary, sentiment).await?)
        },
        ContactsCommand::Tone { name } => print_json(&contacts.tone_guidelines(&name).await?),
        ContactsCommand::Draft { name, topic, message_type } => {
            print_json(&contacts.draft_context(&name, &topic, &message_type).await?)
        },
    }
}
