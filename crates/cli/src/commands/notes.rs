use anyhow::Result;
use chief_core::{InputType, Priority, Workspace, classify_workspace};
use clap::Subcommand;

use crate::{load_services, print_json};

#[derive(Subcommand)]
pub(crate) enum NotesCommand {
    /// Open a note session; the workspace is classified from the title unless given
    Start {
        #[arg(default_value = "")]
        title: String,
        #[arg(short, long)]
        workspace: Option<Workspace>,
    },
    /// Append an entry and extract its action items
    Add { session_id: String, content: String },
    /// Close a session with a summary
    End { session_id: String },
    Show { session_id: String },
    List,
    /// Record a voice transcript as a complete session
    Voice {
        transcript: String,
        #[arg(short, long)]
        workspace: Option<Workspace>,
    },
    /// Pending action items
    Pending,
    /// Add an action item by hand
    Action {
        description: String,
        #[arg(short, long, default_value = "medium")]
        priority: String,
        #[arg(short, long)]
        due: Option<String>,
        #[arg(short, long)]
        workspace: Option<Workspace>,
    },
    Complete { action_id: String },
}

pub(crate) async fn run(command: NotesCommand) -> Result<()> {
    let notes = load_services()?.notes;
    match command {
        NotesCommand::Start { title, workspace } => {
            let workspace = workspace.unwrap_or_else(|| classify_workspace(&title));
            print_json(&notes.start_session(&title, workspace).await?)
        },
        NotesCommand::Add { session_id, content } => {
            print_json(&notes.add_entry(&session_id, &content, InputType::Text).await?)
        },
        NotesCommand::End { session_id } => print_json(&notes.end_session(&session_id).await?),
        NotesCommand::Show { session_id } => print_json(&notes.get_session(&session_id).await?),
        NotesCommand::List => print_json(&notes.list_sessions().await?),
        NotesCommand::Voice { transcript, workspace } => {
            let workspace = workspace.unwrap_or_else(|| classify_workspace(&transcript));
            print_json(&notes.capture_voice_note(&transcript, workspace).await?)
        },
        NotesCommand::Pending => print_json(&notes.get_pending_actions().await?),
        NotesCommand::Action { description, priority, due, workspace } => {
            let workspace = workspace.unwrap_or_else(|| classify_workspace(&description));
            let action = notes
                .add_action(&description, workspace, Priority::from_str_lossy(&priority), due)
                .await?;
            print_json(&action)
        },
        NotesCommand::Complete { action_id } => print_json(&notes.complete_action(&action_id).await?),
    }
}
