/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{TokenCache, TokenManager};
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::order::OrderService;
use crate::application::resolver::{Resolution, resolve_candidates};
use crate::constants::{IDEMPOTENCY_HEADER, ORDER_PATH};
use crate::error::AppError;
use crate::model::endpoint::EndpointCandidate;
use crate::model::http::{HttpExecutor, RemoteExecutor, RemoteRequest, RemoteResponse, join_url};
use crate::model::normalize::{normalize_float, normalize_int};
use crate::model::requests::{AccountPayload, Direction, OrderPayload, OrderRequest};
use crate::model::responses::{
    AccountSummaryReport, BalanceSnapshot, DepositSnapshot, OrderAck,
};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authenticated client of the remote brokerage API
///
/// Holds the configuration, the executor every call goes through and the token
/// manager. Account and order operations are implemented on this type through
/// [`AccountService`](crate::application::interfaces::account::AccountService)
/// and [`OrderService`](crate::application::interfaces::order::OrderService).
pub struct Client {
    config: Arc<Config>,
    executor: Arc<dyn RemoteExecutor>,
    tokens: TokenManager,
}

impl Client {
    /// Creates a client backed by a real HTTP executor and a fresh token cache
    pub fn new(config: Config) -> Result<Self, AppError> {
        let executor = HttpExecutor::new()?;
        Ok(Self::with_executor(config, Arc::new(executor)))
    }

    /// Creates a client around an existing executor
    pub fn with_executor(config: Config, executor: Arc<dyn RemoteExecutor>) -> Self {
        Self::with_parts(config, executor, Arc::new(TokenCache::new()))
    }

    /// Creates a client sharing an existing token cache
    pub fn with_parts(
        config: Config,
        executor: Arc<dyn RemoteExecutor>,
        cache: Arc<TokenCache>,
    ) -> Self {
        let tokens = TokenManager::new(&config, Arc::clone(&executor), cache);
        Self {
            config: Arc::new(config),
            executor,
            tokens,
        }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Token manager
    #[must_use]
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Shortcut for [`TokenManager::get_token`]
    pub async fn get_token(&self, allow_failure: bool) -> Result<String, AppError> {
        self.tokens.get_token(allow_failure).await
    }

    /// Sends an authorized JSON POST to `path`
    ///
    /// Adds the standard headers (bearer token, app key/secret, `api-id`) and
    /// then `extra_headers`. The response is returned whatever its status; only a
    /// missing token or an unserializable payload is an error.
    pub async fn post_json<B>(
        &self,
        path: &str,
        operation_id: &str,
        payload: &B,
        extra_headers: &[(&str, &str)],
    ) -> Result<RemoteResponse, AppError>
    where
        B: Serialize + ?Sized,
    {
        let token = self.get_token(false).await?;
        let body = serde_json::to_value(payload)?;
        let url = join_url(self.config.base_url(), path);
        debug!("POST {} [{}]", url, operation_id);

        let request = RemoteRequest::post_json(url, body, self.config.rest_api.request_timeout())
            .headers(self.standard_headers(&token, operation_id))
            .headers(extra_headers.iter().copied());

        Ok(self.executor.send(request).await)
    }

    /// Tries each candidate with the same payload until one answers with HTTP 200
    pub async fn resolve<B>(
        &self,
        candidates: &[EndpointCandidate],
        payload: &B,
    ) -> Result<Resolution, AppError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        resolve_candidates(candidates, |candidate| {
            let body = body.clone();
            async move {
                self.post_json(&candidate.path, &candidate.operation_id, &body, &[])
                    .await
            }
        })
        .await
    }

    fn standard_headers(&self, token: &str, operation_id: &str) -> Vec<(String, String)> {
        let credentials = &self.config.credentials;
        vec![
            (
                "Content-Type".to_string(),
                "application/json; charset=UTF-8".to_string(),
            ),
            ("authorization".to_string(), format!("Bearer {token}")),
            ("appkey".to_string(), credentials.app_key.clone()),
            ("appsecret".to_string(), credentials.app_secret.clone()),
            ("api-id".to_string(), operation_id.to_string()),
        ]
    }
}

#[async_trait]
impl AccountService for Client {
    async fn fetch_deposit(&self) -> Result<DepositSnapshot, AppError> {
        info!("Querying deposit");
        let payload = AccountPayload::new(&self.config.credentials);
        let resolved = self
            .resolve(&self.config.endpoints.deposit, &payload)
            .await?
            .into_result()?;

        let aliases = &self.config.aliases;
        let snapshot = DepositSnapshot {
            deposit: normalize_int(&resolved.body, &aliases.deposit),
            orderable_cash: normalize_int(&resolved.body, &aliases.orderable_cash),
            endpoint: resolved.endpoint,
            raw: resolved.body,
            trace: resolved.trace,
        };
        debug!(
            "Deposit from {}: deposit={} orderable={}",
            snapshot.endpoint.path, snapshot.deposit, snapshot.orderable_cash
        );
        Ok(snapshot)
    }

    async fn fetch_balance(&self) -> Result<BalanceSnapshot, AppError> {
        info!("Querying balance");
        let payload = AccountPayload::new(&self.config.credentials);
        let resolved = self
            .resolve(&self.config.endpoints.balance, &payload)
            .await?
            .into_result()?;

        let aliases = &self.config.aliases;
        let body = &resolved.body;
        let snapshot = BalanceSnapshot {
            total_purchase: normalize_int(body, &aliases.total_purchase),
            total_eval: normalize_int(body, &aliases.total_eval),
            total_pl: normalize_int(body, &aliases.total_pl),
            total_return_pct: normalize_float(body, &aliases.total_return_pct),
            today_realized_pl: normalize_int(body, &aliases.today_realized_pl),
            endpoint: resolved.endpoint,
            raw: resolved.body,
            trace: resolved.trace,
        };
        debug!(
            "Balance from {}: eval={} pl={} return={}%",
            snapshot.endpoint.path, snapshot.total_eval, snapshot.total_pl, snapshot.total_return_pct
        );
        Ok(snapshot)
    }

    async fn account_summary(&self) -> Result<AccountSummaryReport, AppError> {
        self.get_token(false).await?;

        let mut report = AccountSummaryReport::default();

        match self.fetch_deposit().await {
            Ok(deposit) => report.summary.apply_deposit(&deposit),
            Err(e @ AppError::TokenAcquisition { .. }) => return Err(e),
            Err(e) => report.errors.push(summary_error("deposit", &e)),
        }

        match self.fetch_balance().await {
            Ok(balance) => report.summary.apply_balance(&balance),
            Err(e @ AppError::TokenAcquisition { .. }) => return Err(e),
            Err(e) => report.errors.push(summary_error("balance", &e)),
        }

        if report.is_complete() {
            info!("Account summary complete");
        } else {
            warn!("Account summary partial: {}", report.errors.join("; "));
        }
        Ok(report)
    }
}

#[async_trait]
impl OrderService for Client {
    async fn submit_order(
        &self,
        direction: Direction,
        order: &OrderRequest,
    ) -> Result<OrderAck, AppError> {
        order.validate()?;

        let payload = OrderPayload::new(&self.config.credentials, order);
        let mut extra_headers = Vec::new();
        if let Some(key) = order.idempotency_key.as_deref().filter(|k| !k.is_empty()) {
            extra_headers.push((IDEMPOTENCY_HEADER, key));
        }

        info!(
            "Submitting {} order: {} x{} (ord_dvsn {}, price {})",
            direction.as_str(),
            payload.pdno,
            payload.ord_qty,
            payload.ord_dvsn,
            payload.ord_prc
        );
        let response = self
            .post_json(ORDER_PATH, direction.operation_id(), &payload, &extra_headers)
            .await?;
        info!("Order response status: {}", response.status);

        Ok(OrderAck {
            status: response.status,
            body: response.body,
            headers: response.headers,
        })
    }
}

/// Short message describing a failed summary query
fn summary_error(query: &str, error: &AppError) -> String {
    match error {
        AppError::EndpointResolution(failure) => match failure.status {
            Some(status) => format!("{query}: no candidate succeeded (last status {status})"),
            None => format!("{query}: no candidate endpoints configured"),
        },
        other => format!("{query}: {other}"),
    }
}
