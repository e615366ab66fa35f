use crate::presentation::envelope::Envelope;
use crate::server::AppState;
use crate::server::error::ApiError;
use axum::Json;
use axum::extract::State;
use serde_json::Value;

/// `GET /api/settings/general`
pub async fn get_general(State(state): State<AppState>) -> Json<Envelope> {
    let data = state.settings.load_general().await;
    Json(Envelope::ok(Value::Object(data)))
}

/// `PUT /api/settings/general`
pub async fn put_general(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Envelope>, ApiError> {
    state
        .settings
        .save_general(&payload)
        .await
        .map_err(ApiError::settings_save_failed)?;
    Ok(Json(Envelope::saved()))
}

/// `GET /api/settings/telegram`
pub async fn get_telegram(State(state): State<AppState>) -> Json<Envelope> {
    let data = state.settings.load_telegram().await;
    Json(Envelope::ok(Value::Object(data)))
}

/// `PUT /api/settings/telegram`
pub async fn put_telegram(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Envelope>, ApiError> {
    state
        .settings
        .save_telegram(&payload)
        .await
        .map_err(ApiError::telegram_save_failed)?;
    Ok(Json(Envelope::saved()))
}
