//! RAG Chat terminal client
//!
//! Command-line and REPL front-end over the session controller.

// Re-export workspace crates
pub use ragchat_api::{self as api, ChatBackend, GatewayConfig, HttpChatBackend};
pub use ragchat_chat::{self as chat, ChatController, SessionState};
pub use ragchat_types::{self as types, Chat, Document, Message};

pub mod app;
pub mod cli;
pub mod config;
pub mod render;

pub use cli::{Cli, Commands};
