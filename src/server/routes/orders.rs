use crate::application::interfaces::order::OrderService;
use crate::constants::IDEMPOTENCY_HEADER;
use crate::error::AppError;
use crate::model::requests::Direction;
use crate::presentation::envelope::Envelope;
use crate::presentation::order::OrderBody;
use crate::server::AppState;
use crate::server::error::ApiError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;

/// `POST /api/orders/stock/buy`
pub async fn buy(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<OrderBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    place(&state, Direction::Buy, &headers, body).await
}

/// `POST /api/orders/stock/sell`
pub async fn sell(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<OrderBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    place(&state, Direction::Sell, &headers, body).await
}

async fn place(
    state: &AppState,
    direction: Direction,
    headers: &HeaderMap,
    body: Result<Json<OrderBody>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::invalid_order(rejection.body_text()))?;
    let idempotency_key = idempotency_key(headers)?;

    let order = body
        .into_request(idempotency_key)
        .map_err(ApiError::invalid_order)?;

    match state.client.submit_order(direction, &order).await {
        Ok(ack) => Ok(Json(ack.into())),
        Err(e @ AppError::InvalidInput(_)) => Err(ApiError::invalid_order(e)),
        Err(e) => Err(e.into()),
    }
}

/// Reads the optional idempotency key
///
/// A key that is not visible ASCII cannot be forwarded verbatim, so the order
/// is refused rather than sent without it.
fn idempotency_key(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    match headers.get(IDEMPOTENCY_HEADER) {
        None => Ok(None),
        Some(value) => value.to_str().map(|key| Some(key.to_string())).map_err(|_| {
            ApiError::invalid_order(format!("{IDEMPOTENCY_HEADER} must be visible ASCII"))
        }),
    }
}
