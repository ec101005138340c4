use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use ragchat_api::ChatBackend;
use ragchat_chat::{ActionError, ChatController};
use ragchat_types::ChatId;

use crate::app::commands::read_document;
use crate::render;

const HELP: &str = "\
Commands:
  /new [title]          create a chat and select it
  /list                 reload the chat list from the server
  /select <id>          switch to another chat
  /refresh              re-fetch the active chat
  /docs                 list reference documents
  /upload <title> <path> upload a text file as a document
  /help                 show this help
  exit | quit           leave
Anything else is sent to the active chat.";

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Empty,
    Exit,
    Help,
    New(Option<String>),
    List,
    Select(ChatId),
    Refresh,
    Docs,
    Upload { title: String, path: PathBuf },
    Send(String),
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if line == "exit" || line == "quit" {
            return Self::Exit;
        }
        if !line.starts_with('/') {
            return Self::Send(line.to_string());
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "/help" => Self::Help,
            "/list" => Self::List,
            "/refresh" => Self::Refresh,
            "/docs" => Self::Docs,
            "/new" if rest.is_empty() => Self::New(None),
            "/new" => Self::New(Some(rest.to_string())),
            "/select" => match rest.parse() {
                Ok(id) => Self::Select(id),
                Err(_) => Self::Invalid(format!("usage: /select <id> (got '{}')", rest)),
            },
            // The path is the last word; everything before it is the title
            "/upload" => match rest.rsplit_once(char::is_whitespace) {
                Some((title, path)) if !title.trim().is_empty() => Self::Upload {
                    title: title.trim().to_string(),
                    path: PathBuf::from(path),
                },
                _ => Self::Invalid("usage: /upload <title> <path>".to_string()),
            },
            other => Self::Invalid(format!("unknown command {}; try /help", other)),
        }
    }
}

fn print_action_error<B: ChatBackend>(controller: &ChatController<B>, error: &ActionError) {
    match error {
        ActionError::Sync { .. } => {
            if let Some(banner) = render::error_banner(&controller.snapshot()) {
                println!("{}", banner);
            }
        }
        other => println!("{}", other.to_string().yellow()),
    }
}

/// Execute one parsed command. Returns false when the REPL should stop.
async fn execute<B: ChatBackend>(controller: &ChatController<B>, command: ReplCommand) -> bool {
    let outcome: Result<(), ActionError> = match command {
        ReplCommand::Empty => Ok(()),
        ReplCommand::Exit => return false,
        ReplCommand::Help => {
            println!("{}", HELP);
            Ok(())
        }
        ReplCommand::Invalid(message) => {
            println!("{}", message.yellow());
            Ok(())
        }
        ReplCommand::List => controller
            .load_chats()
            .await
            .map(|_| println!("{}", render::sidebar(&controller.snapshot()))),
        ReplCommand::New(title) => controller
            .create_chat(title.as_deref())
            .await
            .map(|_| println!("{}", render::main_pane(&controller.snapshot()))),
        ReplCommand::Select(id) => {
            if controller.select_chat(id) {
                println!("{}", render::main_pane(&controller.snapshot()));
            } else {
                println!("{}", format!("No chat with id {}", id).yellow());
            }
            Ok(())
        }
        ReplCommand::Refresh => match controller.snapshot().store.active_id() {
            Some(id) => controller
                .refresh_chat(id)
                .await
                .map(|chat| println!("{}", render::transcript(&chat))),
            None => Err(ActionError::NoActiveChat),
        },
        ReplCommand::Docs => controller
            .list_documents()
            .await
            .map(|docs| println!("{}", render::documents(&docs))),
        ReplCommand::Upload { title, path } => match read_document(&path) {
            Ok(content) => controller
                .upload_document(&title, &content)
                .await
                .map(|doc| println!("Uploaded document {} ({})", doc.id, doc.title)),
            Err(e) => {
                println!("{}", format!("{:#}", e).yellow());
                Ok(())
            }
        },
        ReplCommand::Send(text) => controller.send_message(&text).await.map(|chat| {
            if let Some(reply) = chat.last_message() {
                println!("{} {}", "bot>".bright_green().bold(), reply.content);
            }
        }),
    };

    if let Err(e) = outcome {
        print_action_error(controller, &e);
    }
    true
}

/// Run interactive REPL mode
pub async fn run_repl_mode<B: ChatBackend>(controller: &ChatController<B>) -> Result<()> {
    println!("{}", "💬 RAG Chat".bright_cyan().bold());
    println!("{}", "Type /help for commands, 'exit' or 'quit' to leave\n".bright_black());

    if let Err(e) = controller.load_chats().await {
        print_action_error(controller, &e);
    }
    println!("{}\n", render::screen(&controller.snapshot()));

    let mut rl = DefaultEditor::new()?;

    loop {
        let prompt = render::prompt(&controller.snapshot());
        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                controller.clear_error();
                if !execute(controller, ReplCommand::parse(&line)).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", format!("Input error: {}", e).red());
                break;
            }
        }
    }

    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}
