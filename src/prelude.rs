/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! # suyatrade prelude
//!
//! Imports the types needed by most users of the crate in one line.
//!
//! ```rust,ignore
//! use suyatrade::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let ack = client.buy(&OrderRequest::market("005930", 10)).await?;
//! ```

// ============================================================================
// CONFIGURATION AND SETUP
// ============================================================================

/// Main configuration
pub use crate::application::config::{Config, Credentials};

/// Library version information
pub use crate::{VERSION, version};

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, TOKENS AND RESOLUTION
// ============================================================================

/// Authenticated remote client
pub use crate::application::client::Client;

/// Token manager and its shared cache
pub use crate::application::auth::{CachedToken, TokenCache, TokenManager};

/// Candidate endpoint resolution
pub use crate::application::resolver::{Resolution, ResolvedEndpoint};

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::order::OrderService;

/// Remote request executor
pub use crate::model::http::{HttpExecutor, RemoteExecutor, RemoteRequest, RemoteResponse};

// ============================================================================
// MODELS
// ============================================================================

/// Endpoint candidates and attempt traces
pub use crate::model::endpoint::{AttemptResult, EndpointCandidate, ResolutionFailure};

/// Orders
pub use crate::model::requests::{Direction, OrderRequest};

/// Responses
pub use crate::model::responses::{
    AccountSummary, AccountSummaryReport, BalanceSnapshot, DepositSnapshot, OrderAck,
    ResponseBody,
};

/// Normalization
pub use crate::model::normalize::{Coercion, FieldAliases, normalize};

// ============================================================================
// SERVER AND STORAGE
// ============================================================================

/// HTTP facade
pub use crate::server::{AppState, build_router, start_server};

/// Settings store
pub use crate::storage::{SettingsStore, TelegramSettings};

// ============================================================================
// COMMONLY USED EXTERNAL TYPES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
