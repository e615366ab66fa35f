/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/
use crate::model::endpoint::{AttemptResult, EndpointCandidate};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;

/// Body returned by the remote service
///
/// The mock service is not consistent about its response shape, so bodies are
/// kept as JSON and read through the accessors below instead of being
/// deserialized into fixed structs. Bodies that are not JSON at all are wrapped
/// as `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseBody(Value);

impl ResponseBody {
    /// Wraps an already parsed JSON value
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parses a raw response text, falling back to `{"text": raw}` when it is not JSON
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self(value),
            Err(_) => Self(json!({ "text": raw })),
        }
    }

    /// Builds the body used for calls that never produced an HTTP response
    #[must_use]
    pub fn error(kind: &str, detail: impl Into<String>) -> Self {
        Self(json!({ "error": kind, "detail": detail.into() }))
    }

    /// Returns the value stored under `key` when the body is a JSON object
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    /// Returns the value of the first key in `keys` that is present in the body
    ///
    /// Keys are checked in the given order, so callers list the preferred label
    /// first. A key that is present with a `null` value still counts as present.
    #[must_use]
    pub fn get_first_present<S: AsRef<str>>(&self, keys: &[S]) -> Option<&Value> {
        keys.iter().find_map(|key| self.get(key.as_ref()))
    }

    /// Returns the first non-empty string stored under one of `keys`
    #[must_use]
    pub fn first_non_empty_str<S: AsRef<str>>(&self, keys: &[S]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key.as_ref()).and_then(Value::as_str))
            .find(|value| !value.is_empty())
    }

    /// Borrow the underlying JSON value
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the body and return the underlying JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Normalized account figures shown on the dashboard
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AccountSummary {
    /// Total deposit
    pub deposit: i64,
    /// Cash available for new orders
    pub orderable_cash: i64,
    /// Realized profit/loss of the current trading day
    pub today_realized_pl: i64,
    /// Total purchase amount of open holdings
    pub total_purchase: i64,
    /// Total evaluation amount of open holdings
    pub total_eval: i64,
    /// Total evaluation profit/loss
    pub total_pl: i64,
    /// Total return in percent
    pub total_return_pct: f64,
}

impl AccountSummary {
    /// Copies the deposit figures into the summary
    pub fn apply_deposit(&mut self, deposit: &DepositSnapshot) {
        self.deposit = deposit.deposit;
        self.orderable_cash = deposit.orderable_cash;
    }

    /// Copies the balance figures into the summary
    pub fn apply_balance(&mut self, balance: &BalanceSnapshot) {
        self.total_purchase = balance.total_purchase;
        self.total_eval = balance.total_eval;
        self.total_pl = balance.total_pl;
        self.total_return_pct = balance.total_return_pct;
        self.today_realized_pl = balance.today_realized_pl;
    }
}

/// Result of a successful deposit query
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct DepositSnapshot {
    /// Total deposit
    pub deposit: i64,
    /// Cash available for new orders
    pub orderable_cash: i64,
    /// Candidate that answered
    pub endpoint: EndpointCandidate,
    /// Body as returned by the remote service
    pub raw: ResponseBody,
    /// Every attempt made while resolving the endpoint
    pub trace: Vec<AttemptResult>,
}

/// Result of a successful balance query
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct BalanceSnapshot {
    /// Total purchase amount
    pub total_purchase: i64,
    /// Total evaluation amount
    pub total_eval: i64,
    /// Total evaluation profit/loss
    pub total_pl: i64,
    /// Total return in percent
    pub total_return_pct: f64,
    /// Realized profit/loss of the current trading day
    pub today_realized_pl: i64,
    /// Candidate that answered
    pub endpoint: EndpointCandidate,
    /// Body as returned by the remote service
    pub raw: ResponseBody,
    /// Every attempt made while resolving the endpoint
    pub trace: Vec<AttemptResult>,
}

/// Account summary together with the sub-queries that failed
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AccountSummaryReport {
    /// Whatever could be normalized; failed sub-queries leave their fields at zero
    pub summary: AccountSummary,
    /// One short diagnostic string per failed sub-query
    pub errors: Vec<String>,
}

impl AccountSummaryReport {
    /// `true` when every sub-query succeeded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Acknowledgement of an order, passed through from the remote service untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    /// HTTP status returned by the remote service
    pub status: i32,
    /// Body returned by the remote service
    pub body: ResponseBody,
    /// Response headers returned by the remote service
    pub headers: BTreeMap<String, String>,
}
