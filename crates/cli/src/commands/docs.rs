use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::{load_services, print_json};

#[derive(Subcommand)]
pub(crate) enum DocsCommand {
    /// Index a text file
    Add {
        file: PathBuf,
        #[arg(short, long)]
        title: String,
        #[arg(short = 't', long, default_value = "general")]
        doc_type: String,
    },
    /// Re-index an existing document from a text file
    Reindex { doc_id: String, file: PathBuf },
    List {
        #[arg(short = 't', long)]
        doc_type: Option<String>,
    },
    Show { doc_id: String },
    Delete { doc_id: String },
    /// Ranked chunks with citations
    Search {
        query: String,
        #[arg(short = 't', long)]
        doc_type: Option<String>,
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Answer a question from the indexed documents
    Ask {
        question: String,
        #[arg(short = 't', long)]
        doc_type: Option<String>,
    },
}

async fn read_text(file: &Path) -> Result<String> {
    tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("cannot read {}", file.display()))
}

pub(crate) async fn run(command: DocsCommand) -> Result<()> {
    let documents = load_services()?.documents;
    match command {
        DocsCommand::Add { file, title, doc_type } => {
            let content = read_text(&file).await?;
            let source = file.display().to_string();
            print_json(&documents.add_document(&title, &content, &doc_type, Some(source)).await?)
        },
        DocsCommand::Reindex { doc_id, file } => {
            let content = read_text(&file).await?;
            print_json(&documents.reindex_document(&doc_id, &content).await?)
        },
        DocsCommand::List { doc_type } => {
            print_json(&documents.list_documents(doc_type.as_deref()).await?)
        },
        DocsCommand::Show { doc_id } => print_json(&documents.get_document(&doc_id).await?),
        DocsCommand::Delete { doc_id } => {
            documents.delete_document(&doc_id).await?;
            println!("Deleted {doc_id}");
            Ok(())
        },
        DocsCommand::Search { query, doc_type, top_k } => {
            print_json(&documents.search(&query, doc_type.as_deref(), top_k).await?)
        },
        DocsCommand::Ask { question, doc_type } => {
            let answer = documents.query_with_answer(&question, doc_type.as_deref()).await?;
            println!("{}", answer.answer);
            for citation in &answer.citations {
                println!("  [{}] {} (score {:.3})", citation.rank, citation.title, citation.score);
            }
            Ok(())
        },
    }
}
