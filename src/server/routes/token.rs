use crate::error::AppError;
use crate::presentation::envelope::Envelope;
use crate::presentation::misc::{TokenDebugResponse, TokenResponse};
use crate::server::AppState;
use crate::server::error::ApiError;
use axum::Json;
use axum::extract::State;

/// `POST /api/token` issues (or reuses) a bearer token
pub async fn issue_token(State(state): State<AppState>) -> Result<Json<Envelope>, ApiError> {
    let token = state
        .client
        .get_token(false)
        .await
        .map_err(ApiError::token_fetch_failed)?;
    let response = serde_json::to_value(TokenResponse { token }).map_err(AppError::from)?;
    Ok(Json(Envelope::ok(response)))
}

/// `GET /api/token/debug` reports whether a token can be obtained, showing only its start
pub async fn token_debug(State(state): State<AppState>) -> Json<TokenDebugResponse> {
    let token = state.client.get_token(true).await.unwrap_or_default();
    Json(TokenDebugResponse::from_token(&token))
}
