//! Smoke checks against a running suyatrade server
//!
//! ```text
//! suyatrade-smoke token
//! suyatrade-smoke buy [CODE] [QTY]
//! suyatrade-smoke limit-buy [CODE] [QTY] [PRICE]
//! suyatrade-smoke summary
//! ```
//!
//! The server address comes from `SUYATRADE_API` (default `http://127.0.0.1:5174`).

use serde_json::{Value, json};
use std::time::Duration;
use suyatrade::constants::IDEMPOTENCY_HEADER;
use suyatrade::presentation::account::AccountSummaryResponse;
use suyatrade::presentation::misc::{TokenDebugResponse, TokenResponse};
use suyatrade::prelude::*;
use suyatrade::utils::config::get_env_or_default;
use suyatrade::utils::id::idempotency_key;

const DEFAULT_API: &str = "http://127.0.0.1:5174";
const DEFAULT_SYMBOL: &str = "005930";

struct Smoke {
    http: reqwest::Client,
    api: String,
}

impl Smoke {
    fn new(api: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            api: api.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api, path)
    }

    async fn token(&self) -> Result<(), Box<dyn std::error::Error>> {
        let response = self.http.post(self.url("/api/token")).send().await?;
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        let reply = TokenResponse::from_reply(status.as_u16(), &body).inspect_err(|e| {
            error!("Token request failed ({}): {}", status, e);
        })?;
        let shown = TokenDebugResponse::from_token(&reply.token);
        info!("TOKEN: {}", shown.token_prefix);

        let health: Value = self.http.get(self.url("/api/health")).send().await?.json().await?;
        info!("BASE_URL: {}", health["base_url"]);
        Ok(())
    }

    async fn order(&self, body: Value) -> Result<(), Box<dyn std::error::Error>> {
        let key = idempotency_key();
        info!("Buying with idempotency key {}", key);

        let response = self
            .http
            .post(self.url("/api/orders/stock/buy"))
            .header(IDEMPOTENCY_HEADER, &key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(parsed) => info!("RESP ({}): {}", status, parsed),
            Err(_) => info!("RESP ({}, text): {}", status, text),
        }
        Ok(())
    }

    async fn summary(&self) -> Result<(), Box<dyn std::error::Error>> {
        let summary: AccountSummaryResponse = self
            .http
            .get(self.url("/api/account/summary"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        println!("{}", summary.to_table());
        Ok(())
    }
}

fn arg_or<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn usage() {
    eprintln!("usage: suyatrade-smoke <token | buy [CODE] [QTY] | limit-buy [CODE] [QTY] [PRICE] | summary>");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let smoke = Smoke::new(get_env_or_default("SUYATRADE_API", DEFAULT_API.to_string()))?;
    info!("Server: {}", smoke.api);

    let code: String = arg_or(&args, 1, DEFAULT_SYMBOL.to_string());
    match args.first().map(String::as_str) {
        Some("token") => smoke.token().await?,
        Some("buy") => {
            let qty: i64 = arg_or(&args, 2, 1);
            smoke
                .order(json!({ "code": code, "qty": qty, "market": true, "price": 0 }))
                .await?
        }
        Some("limit-buy") => {
            let qty: i64 = arg_or(&args, 2, 1);
            let price: i64 = arg_or(&args, 3, 65000);
            smoke
                .order(json!({ "code": code, "qty": qty, "market": false, "price": price }))
                .await?
        }
        Some("summary") => smoke.summary().await?,
        _ => usage(),
    }
    Ok(())
}
