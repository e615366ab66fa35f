/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! Remote request executor
//!
//! Every outbound call, the token request included, goes through
//! [`RemoteExecutor::send`]. The executor never fails: a request that produced no
//! HTTP response (connect error, timeout, unreadable body) comes back with the
//! synthetic status `-1` and a body describing the failure, so that callers can
//! record it like any other attempt.

use crate::constants::{TRANSPORT_FAILURE_STATUS, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ResponseBody;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Payload attached to a remote request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestPayload {
    /// No body and no query string
    #[default]
    None,
    /// JSON request body
    Json(Value),
    /// URL query pairs
    Query(Vec<(String, String)>),
}

/// A single outbound HTTP request
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Header name/value pairs, sent in order
    pub headers: Vec<(String, String)>,
    /// Body or query string
    pub payload: RequestPayload,
    /// Timeout of the whole call
    pub timeout: Duration,
}

impl RemoteRequest {
    /// Creates a POST request carrying a JSON body
    pub fn post_json(url: impl Into<String>, body: Value, timeout: Duration) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            payload: RequestPayload::Json(body),
            timeout,
        }
    }

    /// Creates a GET request carrying query pairs
    pub fn get(url: impl Into<String>, query: Vec<(String, String)>, timeout: Duration) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            payload: RequestPayload::Query(query),
            timeout,
        }
    }

    /// Appends a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends several headers
    #[must_use]
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Returns the value of the first header called `name` (case-insensitive)
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the JSON body, if any
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        match &self.payload {
            RequestPayload::Json(body) => Some(body),
            _ => None,
        }
    }
}

/// Response of a remote call
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    /// HTTP status, or `-1` when no response was received
    pub status: i32,
    /// Parsed body
    pub body: ResponseBody,
    /// Response headers, names lowercased
    pub headers: BTreeMap<String, String>,
}

impl RemoteResponse {
    /// Creates a response without headers
    #[must_use]
    pub fn new(status: i32, body: impl Into<ResponseBody>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Creates the synthetic response of a call that never got an HTTP answer
    #[must_use]
    pub fn transport_failure(detail: impl Into<String>) -> Self {
        Self::new(
            TRANSPORT_FAILURE_STATUS,
            ResponseBody::error("REQUEST_FAILED", detail),
        )
    }

    /// `true` for an HTTP 200
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs one HTTP call against the remote service
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    /// Sends `request` and returns whatever came back
    async fn send(&self, request: RemoteRequest) -> RemoteResponse;
}

/// [`RemoteExecutor`] backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// Builds the underlying HTTP client
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteExecutor for HttpExecutor {
    async fn send(&self, request: RemoteRequest) -> RemoteResponse {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.payload {
            RequestPayload::None => builder,
            RequestPayload::Json(body) => builder.json(body),
            RequestPayload::Query(pairs) => builder.query(pairs),
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} {} failed: {}", request.method, request.url, e);
                return RemoteResponse::transport_failure(e.to_string());
            }
        };

        let status = i32::from(response.status().as_u16());
        let headers = collect_headers(response.headers());
        debug!("Response status: {}", status);

        match response.text().await {
            Ok(text) => RemoteResponse {
                status,
                body: ResponseBody::from_text(&text),
                headers,
            },
            Err(e) => {
                warn!("Failed to read body of {} {}: {}", request.method, request.url, e);
                RemoteResponse::transport_failure(e.to_string())
            }
        }
    }
}

/// Copies response headers into an ordered map; values that are not valid UTF-8 are skipped
#[must_use]
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect()
}

/// Joins a base URL and a path without doubling or dropping the slash
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
