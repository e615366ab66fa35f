use crate::common::test_credentials;
use suyatrade::application::config::{Config, RestApiConfig};
use suyatrade::model::retry::RetryConfig;
use std::time::Duration;

#[test]
fn test_with_credentials_uses_defaults() {
    let config = Config::with_credentials(test_credentials());

    assert_eq!(config.rest_api, RestApiConfig::default());
    assert_eq!(config.rest_api.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.rest_api.token_request_timeout(), Duration::from_secs(12));
    assert_eq!(config.retry, RetryConfig::standard());
    assert_eq!(config.endpoints.deposit.len(), 3);
    assert_eq!(config.endpoints.balance.len(), 3);
    assert_eq!(config.server.bind_addr, "127.0.0.1:5174");
    assert!(!config.debug);
}

#[test]
fn test_base_url_drops_trailing_slash() {
    let mut credentials = test_credentials();
    credentials.base_url = "https://mockapi.kiwoom.com/".to_string();
    let config = Config::with_credentials(credentials);
    assert_eq!(config.base_url(), "https://mockapi.kiwoom.com");
}

#[test]
fn test_display_never_shows_app_secret() {
    let config = Config::with_credentials(test_credentials());
    let shown = config.to_string();
    assert!(shown.contains("test-app-key"));
    assert!(!shown.contains("test-app-secret"));
}

#[test]
fn test_endpoint_candidates_order() {
    let config = Config::with_credentials(test_credentials());
    let paths: Vec<_> = config.endpoints.deposit.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["/api/dsacc/deposit", "/api/accno/deposit", "/api/acc/deposit"]
    );
    assert!(config.endpoints.balance.iter().all(|c| c.operation_id == "kt00017"));
}
