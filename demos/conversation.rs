//! Multi-turn console conversation against an Assistant workspace.
//!
//! Reads `CONVERSATION_APIKEY` (or `CONVERSATION_USERNAME`/`PASSWORD`) and
//! `WORKSPACE_ID` from the environment, then relays stdin lines to the
//! workspace, threading the conversation context between turns.
//!
//! ```sh
//! WORKSPACE_ID=... CONVERSATION_APIKEY=... cargo run --example conversation
//! ```

use std::io::{BufRead, Write as _};

use watson_sdk::Assistant;
use watson_sdk::services::assistant::types::{MessageInput, MessageOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watson_sdk=info".into()),
        )
        .init();

    let workspace_id = std::env::var("WORKSPACE_ID")?;
    let assistant = Assistant::from_env()?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut context = None;

    println!("Connected to workspace {workspace_id}. Type a message (Ctrl-D to quit).");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = assistant
            .message(
                &workspace_id,
                MessageOptions {
                    input: Some(MessageInput::text(line)),
                    context: context.take(),
                    ..Default::default()
                },
            )
            .await?
            .into_result();

        if let Some(output) = &response.output {
            for text in &output.text {
                println!("{text}");
            }
        }

        // Carry the returned context into the next turn, unmodified.
        context = response.context;
    }

    Ok(())
}
