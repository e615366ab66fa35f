use crate::presentation::misc::HealthResponse;
use crate::server::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::Redirect;

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(state.client.config().base_url()))
}

/// `GET /` sends the browser to the dashboard
pub async fn root() -> Redirect {
    Redirect::temporary("/web/")
}
