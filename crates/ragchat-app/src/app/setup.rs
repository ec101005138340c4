use anyhow::{Context, Result};

use ragchat_api::HttpChatBackend;
use ragchat_chat::ChatController;

use crate::cli::Cli;
use crate::config::gateway_config_from_cli;

/// Build the session controller from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<ChatController<HttpChatBackend>> {
    let config = gateway_config_from_cli(cli)?;
    let backend = HttpChatBackend::from_config(&config)
        .with_context(|| format!("Failed to configure backend at {}", config.base_url))?;

    log::debug!("using backend {}", backend.base_url());
    if let Some(dir) = &config.logs_dir {
        log::info!("logging HTTP exchanges to {}", dir.display());
    }

    Ok(ChatController::new(backend))
}
