mod commands;

use anyhow::Result;
use chief_core::AppConfig;
use chief_service::Services;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use commands::contacts::ContactsCommand;
use commands::creds::CredsCommand;
use commands::docs::DocsCommand;
use commands::notes::NotesCommand;

#[derive(Parser)]
#[command(name = "chief")]
#[command(about = "Personal executive assistant: notes, documents, credentials and contacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (chat API, SMS and briefing webhooks)
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Interactive conversation on stdin
    Chat,
    /// Send a single message to the assistant
    Ask { message: String },
    /// Print (and optionally text) a briefing
    Briefing {
        #[arg(short, long, default_value = "morning")]
        kind: String,
        #[arg(long)]
        send: bool,
    },
    /// Load sample documents, credentials and contacts
    Seed,
    Notes {
        #[command(subcommand)]
        command: NotesCommand,
    },
    Docs {
        #[command(subcommand)]
        command: DocsCommand,
    },
    Creds {
        #[command(subcommand)]
        command: CredsCommand,
    },
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },
}

pub(crate) fn load_services() -> Result<Services> {
    let config = AppConfig::from_env()?;
    tracing::debug!(db = %config.db_path.display(), "loading services");
    Ok(Services::from_config(&config)?)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Chat => commands::chat::run_chat().await?,
        Commands::Ask { message } => commands::chat::run_ask(&message).await?,
        Commands::Briefing { kind, send } => commands::briefing::run(&kind, send).await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Notes { command } => commands::notes::run(command).await?,
        Commands::Docs { command } => commands::docs::run(command).await?,
        Commands::Creds { command } => commands::creds::run(command).await?,
        Commands::Contacts { command } => commands::contacts::run(command).await?,
    }

    Ok(())
}
