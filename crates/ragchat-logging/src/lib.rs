// Logging module - HTTP exchange logging for the chat gateway
pub mod request_logger;

use std::path::PathBuf;
use anyhow::{Result, Context};

// Re-export request logging functions
pub use request_logger::{
    log_request,
    log_response,
    log_exchange_to_file,
    format_body,
};

/// Bodies longer than this are truncated on the console
pub const MAX_CONSOLE_BODY_CHARS: usize = 5000;

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base ragchat directory (~/.ragchat)
pub fn get_ragchat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let ragchat_dir = PathBuf::from(home_dir).join(".ragchat");

    if !ragchat_dir.exists() {
        std::fs::create_dir_all(&ragchat_dir)
            .context("Failed to create ragchat directory")?;
    }

    Ok(ragchat_dir)
}

/// Get or create the logs directory (~/.ragchat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_ragchat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
