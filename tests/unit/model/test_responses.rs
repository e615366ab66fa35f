use assert_json_diff::assert_json_eq;
use serde_json::json;
use suyatrade::model::endpoint::{EndpointCandidate, ResolutionFailure};
use suyatrade::model::responses::{AccountSummaryReport, ResponseBody};
use std::collections::BTreeMap;

#[test]
fn test_non_json_text_is_wrapped() {
    let body = ResponseBody::from_text("Service Unavailable");
    assert_json_eq!(body.as_value(), json!({ "text": "Service Unavailable" }));
}

#[test]
fn test_json_text_is_parsed() {
    let body = ResponseBody::from_text(r#"{"token":"abc"}"#);
    assert_eq!(body.get("token"), Some(&json!("abc")));
}

#[test]
fn test_get_first_present_honours_order() {
    let body = ResponseBody::new(json!({ "b": 2, "a": 1 }));
    assert_eq!(body.get_first_present(&["a", "b"]), Some(&json!(1)));
    assert_eq!(body.get_first_present(&["c", "b"]), Some(&json!(2)));
    assert_eq!(body.get_first_present(&["c"]), None);
}

#[test]
fn test_null_counts_as_present() {
    let body = ResponseBody::new(json!({ "a": null, "b": 2 }));
    assert_eq!(body.get_first_present(&["a", "b"]), Some(&json!(null)));
}

#[test]
fn test_body_serializes_transparently() {
    let body = ResponseBody::new(json!({ "x": [1, 2] }));
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"x":[1,2]}"#);
}

#[test]
fn test_report_completeness() {
    let mut report = AccountSummaryReport::default();
    assert!(report.is_complete());
    report.errors.push("balance: boom".to_string());
    assert!(!report.is_complete());
}

#[test]
fn test_resolution_failure_display() {
    let failure = ResolutionFailure {
        endpoint: Some(EndpointCandidate::new("/api/acc/deposit", "kt00001")),
        status: Some(404),
        body: ResponseBody::default(),
        headers: BTreeMap::new(),
        trace: Vec::new(),
    };
    let shown = failure.to_string();
    assert!(shown.contains("kt00001"));
    assert!(shown.contains("/api/acc/deposit"));
    assert!(shown.contains("404"));
}
