use crate::common::test_credentials;
use assert_json_diff::assert_json_eq;
use serde_json::json;
use suyatrade::model::responses::{AccountSummary, AccountSummaryReport};
use suyatrade::presentation::account::{AccountDebugResponse, AccountSummaryResponse};

fn report(errors: Vec<String>) -> AccountSummaryReport {
    AccountSummaryReport {
        summary: AccountSummary {
            deposit: 1_000,
            orderable_cash: 900,
            today_realized_pl: -5,
            total_purchase: 400,
            total_eval: 420,
            total_pl: 20,
            total_return_pct: 5.0,
        },
        errors,
    }
}

#[test]
fn test_summary_response_field_names() {
    let response = AccountSummaryResponse::from(report(Vec::new()));
    assert_json_eq!(
        json!(response),
        json!({
            "ok": true,
            "errors": [],
            "deposit": 1000,
            "orderable": 900,
            "today_realized": -5,
            "total_purchase": 400,
            "total_eval": 420,
            "total_pl": 20,
            "total_return": 5.0
        })
    );
}

#[test]
fn test_summary_with_errors_is_not_ok() {
    let response = AccountSummaryResponse::from(report(vec!["balance: x".to_string()]));
    assert!(!response.ok);
    assert_eq!(response.errors.len(), 1);
}

#[test]
fn test_summary_table_lists_errors() {
    let response = AccountSummaryResponse::from(report(vec!["deposit: boom".to_string()]));
    let table = response.to_table();
    assert!(table.contains("Orderable"));
    assert!(table.contains("5.00%"));
    assert!(table.contains("! deposit: boom"));
}

#[test]
fn test_debug_response_echoes_account() {
    let debug = AccountDebugResponse::from(&test_credentials());
    assert_eq!(debug.base, "http://mock.local");
    assert_eq!(debug.account, "81234567");
    assert_eq!(debug.product, "01");
    assert!(!debug.note.is_empty());
}
