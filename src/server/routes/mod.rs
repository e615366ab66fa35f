/// Account summary routes
pub mod account;
/// Health check and redirect
pub mod misc;
/// Cash order routes
pub mod orders;
/// Settings document routes
pub mod settings;
/// Token routes
pub mod token;
