use std::path::PathBuf;

use thiserror::Error;

/// Default backend URL (the development server's API root)
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API URL is empty")]
    EmptyBaseUrl,
    #[error("invalid API URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Gateway settings
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// API root, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Dump every request/response to the console
    pub verbose: bool,
    /// When set, each exchange is also written to a file in this directory
    pub logs_dir: Option<PathBuf>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            verbose: false,
            logs_dir: None,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_logs_dir(mut self, logs_dir: Option<PathBuf>) -> Self {
        self.logs_dir = logs_dir;
        self
    }
}

/// Normalize an API root so that endpoint paths can be appended to it.
///
/// Surrounding whitespace and trailing slashes are removed; only http and
/// https URLs are accepted.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
