/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/
use crate::model::endpoint::ResolutionFailure;
use crate::model::responses::ResponseBody;
use std::fmt;

/// Errors produced by the suyatrade core
///
/// Transport failures of a single remote call are not represented here: the
/// executor turns them into a synthetic status so that a resolution trace can
/// record them and move on. What reaches this enum is what a caller has to act on.
#[derive(Debug)]
pub enum AppError {
    /// HTTP client could not be built or used outside of a traced remote call
    Network(reqwest::Error),
    /// Filesystem failure (settings store, alias file)
    Io(std::io::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Every token attempt failed or a non-retryable status was returned
    TokenAcquisition {
        /// Status of the last attempt (`-1` when no response was received)
        status: i32,
        /// Body of the last attempt
        body: ResponseBody,
    },
    /// No candidate endpoint answered with HTTP 200
    EndpointResolution(ResolutionFailure),
    /// Caller supplied a value the remote service must never see
    InvalidInput(String),
    /// Configuration could not be loaded
    Config(String),
}

impl AppError {
    /// Short machine-readable code used by the HTTP facade
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::TokenAcquisition { .. } => "TOKEN_FETCH_FAILED",
            AppError::EndpointResolution(_) => "ENDPOINT_RESOLUTION_FAILED",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::TokenAcquisition { status, body } => {
                write!(f, "token request failed with status {status}: {body}")
            }
            AppError::EndpointResolution(failure) => write!(f, "{failure}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<ResolutionFailure> for AppError {
    fn from(failure: ResolutionFailure) -> Self {
        AppError::EndpointResolution(failure)
    }
}
