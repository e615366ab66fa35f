/// Account summary shapes
pub mod account;
/// Generic `{status_code, response, headers}` envelope
pub mod envelope;
/// Order request and response shapes
pub mod order;
/// Token, health and other diagnostic shapes
pub mod misc;
