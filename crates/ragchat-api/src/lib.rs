//! # ragchat-api
//!
//! The remote sync gateway: one async operation per backend capability,
//! each returning either the decoded payload or a [`SyncError`].
//!
//! ## Features
//!
//! - **Single Trait**: `ChatBackend` is the seam the session controller talks to
//! - **Uniform Failures**: transport errors, non-2xx statuses and malformed
//!   payloads all surface as `SyncError`
//! - **No Hidden State**: the gateway never touches application state
//! - **Debug Dumps**: optional console and file logging of every exchange
//!
//! ## Example
//!
//! ```rust,no_run
//! use ragchat_api::{ChatBackend, GatewayConfig, HttpChatBackend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = HttpChatBackend::from_config(&GatewayConfig::default())?;
//!
//!     let chat = backend.create_chat("New Chat 1").await?;
//!     let reply = backend.send_message(chat.id, "Hello!").await?;
//!     println!("Response: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use client::{
    ChatBackend,
    HttpChatBackend,
    SyncError,
};

pub use config::{
    ConfigError,
    GatewayConfig,
    DEFAULT_API_URL,
    normalize_base_url,
};
