/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_TOKEN_MAX_ATTEMPTS, DEFAULT_TOKEN_RETRY_DELAY_MS};
use crate::utils::config::get_env_or_none;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statuses treated as transient by the token request loop
pub const RETRYABLE_STATUSES: [i32; 2] = [429, 500];

/// Attempt budget and backoff of the token request loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included (None = 3)
    pub max_attempt_count: Option<u32>,
    /// Delay in milliseconds after a transient failure (None = 1200)
    pub retry_delay_ms: Option<u64>,
}

impl RetryConfig {
    /// Reads the budget from `TOKEN_MAX_ATTEMPTS` / `TOKEN_RETRY_DELAY_MS`, falling back to 3 attempts and 1.2 s
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in budget, ignoring the environment
    #[must_use]
    pub fn standard() -> Self {
        Self {
            max_attempt_count: None,
            retry_delay_ms: None,
        }
    }

    /// Custom attempt count with the default delay
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempt_count: Some(max_attempts),
            retry_delay_ms: None,
        }
    }

    /// Custom delay with the default attempt count
    #[must_use]
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            max_attempt_count: None,
            retry_delay_ms: Some(delay_ms),
        }
    }

    /// Custom attempt count and delay
    #[must_use]
    pub fn with_max_attempts_and_delay(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            max_attempt_count: Some(max_attempts),
            retry_delay_ms: Some(delay_ms),
        }
    }

    /// Number of attempts, never less than one
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempt_count
            .unwrap_or(DEFAULT_TOKEN_MAX_ATTEMPTS)
            .max(1)
    }

    /// Delay after a transient failure
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms.unwrap_or(DEFAULT_TOKEN_RETRY_DELAY_MS))
    }

    /// Whether `status` is worth another attempt
    #[must_use]
    pub fn is_retryable(status: i32) -> bool {
        RETRYABLE_STATUSES.contains(&status)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempt_count: get_env_or_none("TOKEN_MAX_ATTEMPTS"),
            retry_delay_ms: get_env_or_none("TOKEN_RETRY_DELAY_MS"),
        }
    }
}
