use crate::constants::{BALANCE_OPERATION_ID, BALANCE_PATHS, DEPOSIT_OPERATION_ID, DEPOSIT_PATHS};
use crate::model::responses::ResponseBody;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One guessed path + operation id pair for a logical operation
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EndpointCandidate {
    /// Path relative to the base URL
    pub path: String,
    /// Operation id sent in the `api-id` header
    pub operation_id: String,
}

impl EndpointCandidate {
    /// Creates a new candidate
    pub fn new(path: impl Into<String>, operation_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operation_id: operation_id.into(),
        }
    }
}

/// Candidates of the deposit query (`kt00001`)
#[must_use]
pub fn deposit_candidates() -> Vec<EndpointCandidate> {
    DEPOSIT_PATHS
        .iter()
        .map(|path| EndpointCandidate::new(*path, DEPOSIT_OPERATION_ID))
        .collect()
}

/// Candidates of the balance query (`kt00017`)
#[must_use]
pub fn balance_candidates() -> Vec<EndpointCandidate> {
    BALANCE_PATHS
        .iter()
        .map(|path| EndpointCandidate::new(*path, BALANCE_OPERATION_ID))
        .collect()
}

/// Outcome of trying one candidate
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttemptResult {
    /// Path that was called
    pub path: String,
    /// Operation id that was sent
    pub operation_id: String,
    /// HTTP status, or `-1` when the call never got a response
    pub http_status: i32,
    /// Body of the response
    pub body: ResponseBody,
}

/// Diagnostic payload of a resolution in which no candidate answered with HTTP 200
///
/// `status`, `body` and `headers` describe the last attempt only; earlier
/// failures are visible through `trace`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionFailure {
    /// Last candidate that was tried, `None` when the candidate list was empty
    pub endpoint: Option<EndpointCandidate>,
    /// Status of the last attempt
    pub status: Option<i32>,
    /// Body of the last attempt
    pub body: ResponseBody,
    /// Headers of the last attempt
    pub headers: BTreeMap<String, String>,
    /// Every attempt, in the order it was made
    pub trace: Vec<AttemptResult>,
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.endpoint, self.status) {
            (Some(endpoint), Some(status)) => write!(
                f,
                "no candidate succeeded for {} after {} attempts (last {} -> status {})",
                endpoint.operation_id,
                self.trace.len(),
                endpoint.path,
                status
            ),
            _ => write!(f, "no candidate endpoints to try"),
        }
    }
}
