use crate::config::{normalize_base_url, ConfigError, GatewayConfig, DEFAULT_API_URL};
use crate::client::HttpChatBackend;

#[test]
fn test_normalize_strips_trailing_slashes() {
    assert_eq!(
        normalize_base_url("http://localhost:8000/api/").unwrap(),
        "http://localhost:8000/api"
    );
    assert_eq!(
        normalize_base_url("http://localhost:8000/api///").unwrap(),
        "http://localhost:8000/api"
    );
}

#[test]
fn test_normalize_trims_whitespace() {
    assert_eq!(
        normalize_base_url("  https://chat.example.com/api \n").unwrap(),
        "https://chat.example.com/api"
    );
}

#[test]
fn test_normalize_rejects_empty() {
    assert_eq!(normalize_base_url(""), Err(ConfigError::EmptyBaseUrl));
    assert_eq!(normalize_base_url("  / "), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn test_normalize_rejects_garbage() {
    assert!(matches!(
        normalize_base_url("not a url"),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn test_normalize_rejects_unsupported_scheme() {
    let err = normalize_base_url("ftp://localhost/api").unwrap_err();
    assert!(err.to_string().contains("unsupported scheme 'ftp'"));
}

#[test]
fn test_default_config_points_at_dev_server() {
    let config = GatewayConfig::default();
    assert_eq!(config.base_url, DEFAULT_API_URL);
    assert!(!config.verbose);
    assert!(config.logs_dir.is_none());
}

#[test]
fn test_backend_from_config_normalizes_url() {
    let config = GatewayConfig::new("http://127.0.0.1:9000/api/").with_verbose(true);
    let backend = HttpChatBackend::from_config(&config).unwrap();
    assert_eq!(backend.base_url(), "http://127.0.0.1:9000/api");
}

#[test]
fn test_backend_from_invalid_config_fails() {
    let config = GatewayConfig::new("");
    assert!(HttpChatBackend::from_config(&config).is_err());
}
