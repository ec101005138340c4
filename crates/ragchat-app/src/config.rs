use anyhow::{Context, Result};

use ragchat_api::{normalize_base_url, GatewayConfig};
use ragchat_logging::get_logs_dir;

use crate::cli::Cli;

/// Build the gateway configuration from command-line flags
pub fn gateway_config_from_cli(cli: &Cli) -> Result<GatewayConfig> {
    let base_url = normalize_base_url(&cli.api_url)
        .with_context(|| format!("Invalid --api-url '{}'", cli.api_url))?;

    let logs_dir = if cli.log_requests {
        Some(get_logs_dir()?)
    } else {
        None
    };

    Ok(GatewayConfig::new(base_url)
        .with_verbose(cli.verbose)
        .with_logs_dir(logs_dir))
}

/// Default log filter: debug output for our crates when verbose
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,ragchat=debug,ragchat_api=debug,ragchat_chat=debug,ragchat_logging=debug"
    } else {
        "warn"
    }
}
