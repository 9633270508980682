use std::io::Write;

use anyhow::Result;
use chief_core::{ConversationContext, Reply};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::load_services;

pub(crate) async fn run_ask(message: &str) -> Result<()> {
    let services = load_services()?;
    let mut ctx = ConversationContext::new();
    let reply = services.assistant.handle(&mut ctx, message).await?;
    print_reply(&reply);
    Ok(())
}

/// Read-eval loop over stdin. One context spans the whole session so
/// note sessions started here can be continued and closed.
pub(crate) async fn run_chat() -> Result<()> {
    let services = load_services()?;
    let mut ctx = ConversationContext::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("chief ready. Type 'exit' to quit.");
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }
        match services.assistant.handle(&mut ctx, line).await {
            Ok(reply) => print_reply(&reply),
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("[{} / {}] {}", reply.workspace, reply.intent, reply.text);
}
