/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! # suyatrade
//!
//! Backend for the suyatrade web dashboard. It proxies the dashboard's calls to
//! the Kiwoom mock REST API and keeps the dashboard's UI settings on disk.
//!
//! The interesting parts live in [`application`]:
//!
//! - [`application::auth::TokenManager`] exchanges the app key/secret for a bearer
//!   token, caches it for 50 minutes and retries transient failures (429/500).
//! - [`application::resolver`] tries an ordered list of candidate endpoints and
//!   returns the first HTTP 200 together with a trace of every attempt.
//! - [`model::normalize`] pulls numbers out of bodies that may be labelled in
//!   Korean or in English.
//! - [`application::client::Client`] ties these together for account queries and
//!   cash orders.
//!
//! [`server`] exposes everything as a small axum REST API under `/api`, and
//! [`storage`] holds the JSON settings documents.
//!
//! ```ignore
//! use suyatrade::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let summary = client.account_summary().await?;
//! println!("deposit: {}", summary.summary.deposit);
//! ```

/// Application layer: configuration, token management, endpoint resolution and services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and normalization models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Response shapes served to the dashboard
pub mod presentation;
/// axum HTTP facade
pub mod server;
/// JSON file settings store
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
