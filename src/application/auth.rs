/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! Token acquisition and caching
//!
//! [`TokenManager::get_token`] returns the cached bearer token while it has at
//! least a minute of validity left, and otherwise runs a short request loop:
//! up to three attempts, pausing ~1.2 s after a 429 or 500 and giving up at once
//! on any other failure status.
//!
//! The cache is an explicit [`TokenCache`] shared through an `Arc`. No lock is
//! held while a token is fetched, so two callers that both find the cache stale
//! may both fetch; the later write wins and both tokens are valid.

use crate::application::config::{Config, Credentials};
use crate::constants::{
    TOKEN_FIELD_NAMES, TOKEN_LIFETIME_SECS, TOKEN_PATH, TOKEN_REFRESH_MARGIN_SECS,
    TRANSPORT_FAILURE_STATUS,
};
use crate::error::AppError;
use crate::model::http::{RemoteExecutor, RemoteRequest, join_url};
use crate::model::requests::TokenRequestBody;
use crate::model::responses::ResponseBody;
use crate::model::retry::RetryConfig;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// A bearer token together with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    /// Token value
    pub value: String,
    /// Moment the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Creates a token that expires at `expires_at`
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Creates a token valid for the standard 50 minutes from now
    pub fn fresh(value: impl Into<String>) -> Self {
        Self::new(value, Utc::now() + Duration::seconds(TOKEN_LIFETIME_SECS))
    }

    /// Remaining validity at `now`; negative once expired
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        self.expires_at - now
    }

    /// Whether the token can still be handed out at `now`
    #[must_use]
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        self.remaining_at(now) >= Duration::seconds(TOKEN_REFRESH_MARGIN_SECS)
    }

    /// Whether the token can still be handed out now
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.is_usable_at(Utc::now())
    }
}

/// Process-wide token slot
///
/// One instance is created at startup and shared with every component that
/// needs a token.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    /// Creates an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token value if it has enough validity left
    pub async fn get_valid(&self) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|token| token.is_usable())
            .map(|token| token.value.clone())
    }

    /// Replaces the cached token
    pub async fn store(&self, token: CachedToken) {
        let mut slot = self.slot.write().await;
        *slot = Some(token);
    }

    /// Returns a copy of the cached token, usable or not
    pub async fn snapshot(&self) -> Option<CachedToken> {
        self.slot.read().await.clone()
    }
}

/// Outcome of one token request
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAttempt {
    /// 1-based attempt number
    pub attempt: u32,
    /// HTTP status, `-1` when no response was received
    pub status: i32,
    /// Response body
    pub body: ResponseBody,
    /// Token found in the body, if any
    pub token: Option<String>,
}

impl TokenAttempt {
    /// A 200 carrying a token
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 200 && self.token.is_some()
    }
}

/// Extracts the token from a token response body
///
/// The field names are checked in priority order; empty or non-string values
/// are skipped.
#[must_use]
pub fn extract_token(body: &ResponseBody) -> Option<String> {
    body.first_non_empty_str(&TOKEN_FIELD_NAMES)
        .map(str::to_string)
}

/// Exchanges the app key/secret for a bearer token and caches it
pub struct TokenManager {
    credentials: Credentials,
    executor: Arc<dyn RemoteExecutor>,
    cache: Arc<TokenCache>,
    retry: RetryConfig,
    timeout: StdDuration,
}

impl TokenManager {
    /// Creates a manager using the configuration's credentials, retry budget and token timeout
    pub fn new(config: &Config, executor: Arc<dyn RemoteExecutor>, cache: Arc<TokenCache>) -> Self {
        Self {
            credentials: config.credentials.clone(),
            executor,
            cache,
            retry: config.retry.clone(),
            timeout: config.rest_api.token_request_timeout(),
        }
    }

    /// The shared cache
    #[must_use]
    pub fn cache(&self) -> &Arc<TokenCache> {
        &self.cache
    }

    /// Returns a token with at least a minute of validity left
    ///
    /// # Arguments
    /// * `allow_failure` - return an empty string instead of an error when no token could be obtained
    ///
    /// # Returns
    /// * `Ok(String)` - cached or freshly acquired token (empty only with `allow_failure`)
    /// * `Err(AppError::TokenAcquisition)` - last status and body of the failed attempts
    pub async fn get_token(&self, allow_failure: bool) -> Result<String, AppError> {
        if let Some(token) = self.cache.get_valid().await {
            return Ok(token);
        }

        debug!("No usable cached token, requesting a new one");
        match self.request_token_with_retry().await {
            Ok(token) => {
                self.cache.store(CachedToken::fresh(token.clone())).await;
                info!("✓ Token acquired, cached for {} minutes", TOKEN_LIFETIME_SECS / 60);
                Ok(token)
            }
            Err(_) if allow_failure => Ok(String::new()),
            Err(last) => Err(AppError::TokenAcquisition {
                status: last.status,
                body: last.body,
            }),
        }
    }

    /// Sends a single token request, without touching the cache
    pub async fn request_token_once(&self, attempt: u32) -> TokenAttempt {
        let url = join_url(&self.credentials.base_url, TOKEN_PATH);
        let body = serde_json::to_value(TokenRequestBody::new(&self.credentials))
            .unwrap_or_default();

        let request = RemoteRequest::post_json(url, body, self.timeout).headers([
            ("Accept", "application/json"),
            ("Content-Type", "application/json; charset=UTF-8"),
            ("appkey", self.credentials.app_key.as_str()),
            ("appsecret", self.credentials.app_secret.as_str()),
            ("secretkey", self.credentials.app_secret.as_str()),
        ]);

        let response = self.executor.send(request).await;
        let token = if response.is_ok() {
            extract_token(&response.body)
        } else {
            None
        };

        TokenAttempt {
            attempt,
            status: response.status,
            body: response.body,
            token,
        }
    }

    /// Runs the attempt loop; `Err` carries the last attempt
    async fn request_token_with_retry(&self) -> Result<String, TokenAttempt> {
        let max_attempts = self.retry.max_attempts();
        let mut last = TokenAttempt {
            attempt: 0,
            status: TRANSPORT_FAILURE_STATUS,
            body: ResponseBody::error("NO_RESPONSE", "no token attempt was made"),
            token: None,
        };

        for attempt in 1..=max_attempts {
            let result = self.request_token_once(attempt).await;

            if let (200, Some(token)) = (result.status, result.token.as_ref()) {
                return Ok(token.clone());
            }

            if !RetryConfig::is_retryable(result.status) {
                error!(
                    "Token request failed with status {} (attempt {}/{}), not retrying: {}",
                    result.status, attempt, max_attempts, result.body
                );
                return Err(result);
            }

            warn!(
                "Token request returned {} (attempt {}/{})",
                result.status, attempt, max_attempts
            );
            last = result;
            if attempt < max_attempts {
                tokio::time::sleep(self.retry.delay()).await;
            }
        }

        error!(
            "Token request failed after {} attempts, last status {}",
            max_attempts, last.status
        );
        Err(last)
    }
}
