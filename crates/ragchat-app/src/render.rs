//! Text projection of a [`SessionState`].
//!
//! Every function here is pure: it takes a snapshot and returns a string.
//! The REPL decides when to print.

use colored::Colorize;
use ragchat_chat::SessionState;
use ragchat_types::{Chat, Document, Message};

pub const EMPTY_PLACEHOLDER: &str = "Select a chat or create a new one";

/// Chat list with the active chat marked
pub fn sidebar(state: &SessionState) -> String {
    let store = &state.store;
    if store.is_empty() {
        return "No chats yet. Use /new to start one.".bright_black().to_string();
    }

    let active = store.active_id();
    store
        .chats()
        .iter()
        .map(|chat| {
            let line = format!("[{}] {}", chat.id, chat.title);
            if Some(chat.id) == active {
                format!("{} {}", "*".green().bold(), line.bold())
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn message_line(message: &Message) -> String {
    if message.is_user {
        format!("{} {}", "you>".bright_blue().bold(), message.content)
    } else {
        format!("{} {}", "bot>".bright_green().bold(), message.content)
    }
}

/// Transcript of a single chat, oldest message first
pub fn transcript(chat: &Chat) -> String {
    let mut out = vec![format!("== {} ==", chat.title).cyan().bold().to_string()];
    if chat.messages.is_empty() {
        out.push("(no messages yet)".bright_black().to_string());
    }
    out.extend(chat.messages.iter().map(message_line));
    out.join("\n")
}

/// Main pane: the active transcript, or the placeholder when nothing is selected
pub fn main_pane(state: &SessionState) -> String {
    match state.store.active() {
        Some(chat) => transcript(chat),
        None => EMPTY_PLACEHOLDER.bright_black().to_string(),
    }
}

pub fn error_banner(state: &SessionState) -> Option<String> {
    state
        .error
        .as_ref()
        .map(|error| format!("⚠ {}", error).red().bold().to_string())
}

/// Prompt string; shows the active chat id and a busy marker
pub fn prompt(state: &SessionState) -> String {
    let busy = if state.busy { "…" } else { "" };
    match state.store.active_id() {
        Some(id) => format!("chat {}{}> ", id, busy),
        None => format!("ragchat{}> ", busy),
    }
}

pub fn documents(docs: &[Document]) -> String {
    if docs.is_empty() {
        return "No documents uploaded.".bright_black().to_string();
    }
    docs.iter()
        .map(|doc| {
            let indexed = if doc.vectorstore_path.is_some() { "indexed" } else { "pending" };
            format!("[{}] {} ({} chars, {})", doc.id, doc.title, doc.content.chars().count(), indexed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full screen: banner, sidebar, main pane
pub fn screen(state: &SessionState) -> String {
    let mut parts = Vec::new();
    if let Some(banner) = error_banner(state) {
        parts.push(banner);
    }
    parts.push(sidebar(state));
    parts.push(String::new());
    parts.push(main_pane(state));
    parts.join("\n")
}
