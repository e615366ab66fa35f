/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! Candidate endpoint resolution
//!
//! The mock service's account endpoints are not documented reliably, so each
//! account query lists a few plausible path/operation-id pairs. They are tried
//! strictly in order, each exactly once, and the first HTTP 200 wins. Transient
//! statuses are not retried here: a failing candidate is assumed to have the
//! wrong shape.

use crate::error::AppError;
use crate::model::endpoint::{AttemptResult, EndpointCandidate, ResolutionFailure};
use crate::model::http::RemoteResponse;
use crate::model::responses::ResponseBody;
use std::collections::BTreeMap;
use std::future::Future;
use tracing::{debug, warn};

/// The candidate that answered with HTTP 200
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEndpoint {
    /// Candidate that answered
    pub endpoint: EndpointCandidate,
    /// Always 200
    pub status: i32,
    /// Body of the successful response
    pub body: ResponseBody,
    /// Headers of the successful response
    pub headers: BTreeMap<String, String>,
    /// Every attempt, the successful one last
    pub trace: Vec<AttemptResult>,
}

/// Outcome of a resolution; both arms carry the full trace
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A candidate answered with HTTP 200
    Resolved(ResolvedEndpoint),
    /// No candidate did
    Failed(ResolutionFailure),
}

impl Resolution {
    /// `true` when a candidate answered with HTTP 200
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Every attempt made, in order
    #[must_use]
    pub fn trace(&self) -> &[AttemptResult] {
        match self {
            Resolution::Resolved(resolved) => &resolved.trace,
            Resolution::Failed(failure) => &failure.trace,
        }
    }

    /// Status of the winning attempt, or of the last attempt on failure
    #[must_use]
    pub fn status(&self) -> Option<i32> {
        match self {
            Resolution::Resolved(resolved) => Some(resolved.status),
            Resolution::Failed(failure) => failure.status,
        }
    }

    /// Body of the winning attempt, or of the last attempt on failure
    #[must_use]
    pub fn body(&self) -> &ResponseBody {
        match self {
            Resolution::Resolved(resolved) => &resolved.body,
            Resolution::Failed(failure) => &failure.body,
        }
    }

    /// Converts into a `Result`, for callers that only care about success
    pub fn into_result(self) -> Result<ResolvedEndpoint, ResolutionFailure> {
        match self {
            Resolution::Resolved(resolved) => Ok(resolved),
            Resolution::Failed(failure) => Err(failure),
        }
    }
}

/// Tries `candidates` in order with `send`, stopping at the first HTTP 200
///
/// `send` performs the actual call for one candidate. It only returns `Err` for
/// failures that make every candidate pointless (no token); transport errors
/// arrive as responses with status `-1` and are recorded like any other attempt.
pub async fn resolve_candidates<F, Fut>(
    candidates: &[EndpointCandidate],
    mut send: F,
) -> Result<Resolution, AppError>
where
    F: FnMut(EndpointCandidate) -> Fut,
    Fut: Future<Output = Result<RemoteResponse, AppError>>,
{
    let mut trace = Vec::with_capacity(candidates.len());
    let mut last: Option<(EndpointCandidate, RemoteResponse)> = None;

    for candidate in candidates {
        let response = send(candidate.clone()).await?;
        debug!(
            "Candidate {} [{}] -> {}",
            candidate.path, candidate.operation_id, response.status
        );

        trace.push(AttemptResult {
            path: candidate.path.clone(),
            operation_id: candidate.operation_id.clone(),
            http_status: response.status,
            body: response.body.clone(),
        });

        if response.is_ok() {
            return Ok(Resolution::Resolved(ResolvedEndpoint {
                endpoint: candidate.clone(),
                status: response.status,
                body: response.body,
                headers: response.headers,
                trace,
            }));
        }
        last = Some((candidate.clone(), response));
    }

    let failure = match last {
        Some((endpoint, response)) => ResolutionFailure {
            endpoint: Some(endpoint),
            status: Some(response.status),
            body: response.body,
            headers: response.headers,
            trace,
        },
        None => ResolutionFailure {
            endpoint: None,
            status: None,
            body: ResponseBody::default(),
            headers: BTreeMap::new(),
            trace,
        },
    };
    warn!("{}", failure);
    Ok(Resolution::Failed(failure))
}
