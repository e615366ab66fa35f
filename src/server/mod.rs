/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/

//! axum facade used by the dashboard
//!
//! JSON routes live under `/api`; the dashboard's static files are served
//! from `/web`, and `/` redirects there.

/// HTTP error mapping
pub mod error;
/// Route handlers
pub mod routes;

use crate::application::client::Client;
use crate::error::AppError;
use crate::storage::SettingsStore;
use axum::Router;
use axum::routing::{get, post};
use routes::{account, misc, orders, settings, token};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Remote brokerage client
    pub client: Arc<Client>,
    /// Dashboard settings documents
    pub settings: Arc<SettingsStore>,
}

impl AppState {
    /// Bundles a client and a settings store
    pub fn new(client: Client, settings: SettingsStore) -> Self {
        Self {
            client: Arc::new(client),
            settings: Arc::new(settings),
        }
    }
}

/// Builds the complete router: `/api`, `/web` and the `/` redirect
pub fn build_router(state: AppState) -> Router {
    let web_dir = state.client.config().server.web_dir.clone();

    let api = Router::new()
        .route("/health", get(misc::health))
        .route("/token", post(token::issue_token))
        .route("/token/debug", get(token::token_debug))
        .route("/account/summary", get(account::summary))
        .route("/account/summary/debug", get(account::summary_debug))
        .route("/orders/stock/buy", post(orders::buy))
        .route("/orders/stock/sell", post(orders::sell))
        .route(
            "/settings/general",
            get(settings::get_general).put(settings::put_general),
        )
        .route(
            "/settings/telegram",
            get(settings::get_telegram).put(settings::put_telegram),
        );

    // Local dashboard only; any origin is accepted.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(misc::root))
        .nest("/api", api)
        .nest_service("/web", ServeDir::new(web_dir))
        .layer(cors)
        .with_state(state)
}

/// Serves the router on an already bound listener until ctrl-c
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Binds `bind_addr` and serves until ctrl-c
pub async fn start_server(state: AppState, bind_addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("🚀 suyatrade server listening on http://{}", listener.local_addr()?);
    info!("Dashboard: http://{}/web/", listener.local_addr()?);
    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
