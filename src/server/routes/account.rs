use crate::application::interfaces::account::AccountService;
use crate::presentation::account::{AccountDebugResponse, AccountSummaryResponse};
use crate::server::AppState;
use crate::server::error::ApiError;
use axum::Json;
use axum::extract::State;

/// `GET /api/account/summary`
///
/// Partial results are still a 200; only a missing token fails the request.
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<AccountSummaryResponse>, ApiError> {
    let report = state.client.account_summary().await?;
    Ok(Json(report.into()))
}

/// `GET /api/account/summary/debug` echoes the account settings in use
pub async fn summary_debug(State(state): State<AppState>) -> Json<AccountDebugResponse> {
    Json(AccountDebugResponse::from(&state.client.config().credentials))
}
