use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use ragchat_api::DEFAULT_API_URL;
use ragchat_types::ChatId;

/// CLI arguments for ragchat
#[derive(Parser, Debug)]
#[command(name = "ragchat")]
#[command(about = "RAG Chat - terminal client for a retrieval-augmented chat backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend API root (e.g., http://localhost:8000/api)
    #[arg(long, value_name = "URL", env = "RAGCHAT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable verbose debug output (shows HTTP requests, responses, headers, etc.)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write every HTTP exchange to ~/.ragchat/logs
    #[arg(long)]
    pub log_requests: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List chats
    List,
    /// Show the transcript of a chat
    Show {
        /// Chat to show
        chat_id: ChatId,
    },
    /// Create a new chat (defaults to "New Chat N")
    New {
        /// Title for the chat
        title: Option<String>,
    },
    /// Send a message to a chat and print the reply
    Send {
        /// Chat to send to
        chat_id: ChatId,
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// List reference documents
    Documents,
    /// Upload a text file as a reference document
    Upload {
        /// Document title
        title: String,
        /// Path to a UTF-8 text file
        path: PathBuf,
    },
}
