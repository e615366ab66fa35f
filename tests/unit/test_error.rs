use serde_json::json;
use std::collections::BTreeMap;
use suyatrade::error::AppError;
use suyatrade::model::endpoint::{EndpointCandidate, ResolutionFailure};
use suyatrade::model::responses::ResponseBody;

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("quantity must be greater than zero".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: quantity must be greater than zero"
    );
    assert_eq!(error.code(), "INVALID_INPUT");
}

#[test]
fn test_app_error_display_token_acquisition() {
    let error = AppError::TokenAcquisition {
        status: 429,
        body: ResponseBody::new(json!({ "msg": "slow down" })),
    };
    let shown = error.to_string();
    assert!(shown.contains("429"));
    assert!(shown.contains("slow down"));
    assert_eq!(error.code(), "TOKEN_FETCH_FAILED");
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("missing APP_KEY".to_string());
    assert_eq!(error.to_string(), "configuration error: missing APP_KEY");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
    assert!(app_error.to_string().starts_with("json error:"));
    assert!(std::error::Error::source(&app_error).is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::Io(_)));
    assert_eq!(app_error.code(), "IO_ERROR");
}

#[test]
fn test_app_error_from_resolution_failure() {
    let failure = ResolutionFailure {
        endpoint: Some(EndpointCandidate::new("/api/acc/balance", "kt00017")),
        status: Some(500),
        body: ResponseBody::default(),
        headers: BTreeMap::new(),
        trace: Vec::new(),
    };
    let app_error: AppError = failure.into();
    assert_eq!(app_error.code(), "ENDPOINT_RESOLUTION_FAILED");
    assert!(app_error.to_string().contains("kt00017"));
}
