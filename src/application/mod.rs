/// Token acquisition and caching
pub mod auth;
/// Authenticated remote client and its service implementations
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Candidate endpoint resolution
pub mod resolver;
