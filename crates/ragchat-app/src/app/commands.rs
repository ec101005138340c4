use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use ragchat_api::ChatBackend;
use ragchat_chat::ChatController;
use ragchat_types::ChatId;

use crate::cli::Commands;
use crate::render;

/// Run a one-shot subcommand and return what should be printed
pub async fn run_command<B: ChatBackend>(
    controller: &ChatController<B>,
    command: &Commands,
) -> Result<String> {
    match command {
        Commands::List => {
            controller.load_chats().await?;
            Ok(render::sidebar(&controller.snapshot()))
        }
        Commands::Show { chat_id } => {
            let chat = controller.refresh_chat(*chat_id).await?;
            Ok(render::transcript(&chat))
        }
        Commands::New { title } => {
            // Listing first so the default title counts existing chats
            controller.load_chats().await?;
            let chat = controller.create_chat(title.as_deref()).await?;
            Ok(format!("Created chat {} ({})", chat.id, chat.title))
        }
        Commands::Send { chat_id, message } => {
            let text = message.join(" ");
            send_to(controller, *chat_id, &text).await
        }
        Commands::Documents => {
            let docs = controller.list_documents().await?;
            Ok(render::documents(&docs))
        }
        Commands::Upload { title, path } => {
            let content = read_document(path)?;
            let doc = controller.upload_document(title, &content).await?;
            Ok(format!("Uploaded document {} ({})", doc.id, doc.title))
        }
    }
}

async fn send_to<B: ChatBackend>(
    controller: &ChatController<B>,
    chat_id: ChatId,
    text: &str,
) -> Result<String> {
    controller.load_chats().await?;
    if !controller.select_chat(chat_id) {
        bail!("Chat {} not found", chat_id);
    }

    let chat = controller.send_message(text).await?;
    match chat.last_message() {
        Some(reply) => Ok(reply.content.clone()),
        None => bail!("Chat {} has no messages after sending", chat_id),
    }
}

/// Read a text file to upload as a document
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read document from {}", path.display()))
}
