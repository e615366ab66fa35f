use crate::constants::{SERVICE_NAME, TOKEN_PREFIX_LEN};
use crate::error::AppError;
use crate::model::responses::ResponseBody;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`
    pub ok: bool,
    /// Always `"ok"`
    pub status: String,
    /// Service name
    pub service: String,
    /// Remote base URL in use
    pub base_url: String,
}

impl HealthResponse {
    /// Health report for a facade talking to `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            ok: true,
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            base_url: base_url.into(),
        }
    }
}

/// `response` part of `POST /api/token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub token: String,
}

impl TokenResponse {
    /// Reads the token out of a `POST /api/token` reply
    ///
    /// A non-2xx status or an envelope without a token is a failure.
    pub fn from_reply(status: u16, body: &Value) -> Result<Self, AppError> {
        let token = body["response"]["token"].as_str().unwrap_or_default();
        if !(200..300).contains(&status) || token.is_empty() {
            return Err(AppError::TokenAcquisition {
                status: i32::from(status),
                body: ResponseBody::new(body.clone()),
            });
        }
        Ok(Self {
            token: token.to_string(),
        })
    }
}

/// Body of `GET /api/token/debug`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDebugResponse {
    /// `true` when a token could be obtained
    pub ok: bool,
    /// Start of the token followed by `...`, empty when there is none
    pub token_prefix: String,
}

impl TokenDebugResponse {
    /// Describes `token` without revealing all of it; an empty token means failure
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.is_empty() {
            return Self {
                ok: false,
                token_prefix: String::new(),
            };
        }
        let prefix: String = token.chars().take(TOKEN_PREFIX_LEN).collect();
        Self {
            ok: true,
            token_prefix: format!("{prefix}..."),
        }
    }
}
