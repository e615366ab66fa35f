//! HTTP error mapping
//!
//! Every failure the facade reports has the body `{"error": CODE, "hint": text}`.

use crate::error::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

/// Error returned by the facade's handlers
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    hint: String,
}

impl ApiError {
    /// Creates an error with an explicit status and code
    pub fn new(status: StatusCode, code: &'static str, hint: impl Into<String>) -> Self {
        Self {
            status,
            code,
            hint: hint.into(),
        }
    }

    /// 502: no token could be obtained from the remote service
    pub fn token_fetch_failed(hint: impl fmt::Display) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "TOKEN_FETCH_FAILED", hint.to_string())
    }

    /// 400: the order was rejected before reaching the remote service
    pub fn invalid_order(hint: impl fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_ORDER", hint.to_string())
    }

    /// 500: the general settings could not be written
    pub fn settings_save_failed(hint: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "SETTINGS_SAVE_FAILED",
            hint.to_string(),
        )
    }

    /// 500: the telegram settings could not be written
    pub fn telegram_save_failed(hint: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "TELEGRAM_SAVE_FAILED",
            hint.to_string(),
        )
    }

    /// HTTP status of the response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable code
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable detail
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.status, self.hint)
    }
}

impl std::error::Error for ApiError {}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::TokenAcquisition { .. } => Self::token_fetch_failed(&err),
            AppError::EndpointResolution(_) => {
                Self::new(StatusCode::BAD_GATEWAY, err.code(), err.to_string())
            }
            AppError::InvalidInput(_) => {
                Self::new(StatusCode::BAD_REQUEST, err.code(), err.to_string())
            }
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        let body = Json(json!({ "error": self.code, "hint": self.hint }));
        (self.status, body).into_response()
    }
}
