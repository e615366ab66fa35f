/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/
/// Candidate endpoints and resolution traces
pub mod endpoint;
/// Remote request executor
pub mod http;
/// Alias-based field normalization
pub mod normalize;
/// Request models for remote calls
pub mod requests;
/// Response models
pub mod responses;
/// Retry configuration for token requests
pub mod retry;
