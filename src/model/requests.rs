/******************************************************************************
   Author: Suyatrade contributors
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::constants::{
    BUY_OPERATION_ID, LIMIT_ORDER_DIVISION, MARKET_ORDER_DIVISION, SELL_OPERATION_ID,
    TOKEN_GRANT_TYPE,
};
use crate::error::AppError;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use regex::Regex;
use serde::{Deserialize, Serialize};

static SYMBOL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("symbol code pattern is valid"));

/// Body of the token request
///
/// The secret is sent twice, as `appsecret` and as `secretkey`, because the mock
/// server has been seen to expect either label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRequestBody {
    /// Always `client_credentials`
    pub grant_type: String,
    /// App key
    pub appkey: String,
    /// App secret
    pub appsecret: String,
    /// App secret again, under the alternate label
    pub secretkey: String,
}

impl TokenRequestBody {
    /// Builds the body from the configured credentials
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            grant_type: TOKEN_GRANT_TYPE.to_string(),
            appkey: credentials.app_key.clone(),
            appsecret: credentials.app_secret.clone(),
            secretkey: credentials.app_secret.clone(),
        }
    }
}

/// Account identification shared by the account queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountPayload {
    /// Account number
    #[serde(rename = "CANO")]
    pub account_no: String,
    /// Account product code
    #[serde(rename = "ACNT_PRDT_CD")]
    pub account_product_code: String,
}

impl AccountPayload {
    /// Builds the payload from the configured credentials
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            account_no: credentials.account_no.clone(),
            account_product_code: credentials.account_product_code.clone(),
        }
    }
}

/// Side of a cash order
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Cash buy
    Buy,
    /// Cash sell
    Sell,
}

impl Direction {
    /// Operation id selecting the remote buy or sell operation
    #[must_use]
    pub fn operation_id(self) -> &'static str {
        match self {
            Direction::Buy => BUY_OPERATION_ID,
            Direction::Sell => SELL_OPERATION_ID,
        }
    }

    /// Lowercase name, as used in routes and logs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }
}

/// A cash order as requested by the dashboard
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Six digit symbol code, e.g. `005930`
    pub symbol_code: String,
    /// Number of shares, must be positive
    pub quantity: u64,
    /// Market order when `true`, limit order otherwise
    pub is_market_order: bool,
    /// Limit price; required for limit orders and ignored for market orders
    pub limit_price: Option<u64>,
    /// Forwarded verbatim to the remote service when present
    pub idempotency_key: Option<String>,
}

impl OrderRequest {
    /// Creates a market order
    pub fn market(symbol_code: impl Into<String>, quantity: u64) -> Self {
        Self {
            symbol_code: symbol_code.into(),
            quantity,
            is_market_order: true,
            limit_price: None,
            idempotency_key: None,
        }
    }

    /// Creates a limit order
    pub fn limit(symbol_code: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            symbol_code: symbol_code.into(),
            quantity,
            is_market_order: false,
            limit_price: Some(price),
            idempotency_key: None,
        }
    }

    /// Attaches an idempotency key; an empty key is treated as absent
    #[must_use]
    pub fn with_idempotency_key(mut self, key: Option<String>) -> Self {
        self.idempotency_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Checks the order before anything is sent
    pub fn validate(&self) -> Result<(), AppError> {
        if !SYMBOL_CODE.is_match(&self.symbol_code) {
            return Err(AppError::InvalidInput(format!(
                "symbol code must be 6 digits, got '{}'",
                self.symbol_code
            )));
        }
        if self.quantity == 0 {
            return Err(AppError::InvalidInput(
                "quantity must be greater than zero".to_string(),
            ));
        }
        if !self.is_market_order && self.limit_price.unwrap_or(0) == 0 {
            return Err(AppError::InvalidInput(
                "limit orders require a positive price".to_string(),
            ));
        }
        Ok(())
    }

    /// `ord_dvsn` value for this order
    #[must_use]
    pub fn order_division(&self) -> &'static str {
        if self.is_market_order {
            MARKET_ORDER_DIVISION
        } else {
            LIMIT_ORDER_DIVISION
        }
    }

    /// Price as sent on the wire: `"0"` for market orders
    #[must_use]
    pub fn price_string(&self) -> String {
        if self.is_market_order {
            "0".to_string()
        } else {
            self.limit_price.unwrap_or(0).to_string()
        }
    }
}

/// Wire body of a cash order
///
/// Quantity and price are strings; the remote service rejects JSON numbers here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Account number
    #[serde(rename = "CANO")]
    pub account_no: String,
    /// Account product code
    #[serde(rename = "ACNT_PRDT_CD")]
    pub account_product_code: String,
    /// Symbol code
    pub pdno: String,
    /// Order division (`01` market, `00` limit)
    pub ord_dvsn: String,
    /// Quantity as a decimal string
    pub ord_qty: String,
    /// Price as a decimal string
    pub ord_prc: String,
}

impl OrderPayload {
    /// Builds the wire body of `order` for the configured account
    #[must_use]
    pub fn new(credentials: &Credentials, order: &OrderRequest) -> Self {
        Self {
            account_no: credentials.account_no.clone(),
            account_product_code: credentials.account_product_code.clone(),
            pdno: order.symbol_code.clone(),
            ord_dvsn: order.order_division().to_string(),
            ord_qty: order.quantity.to_string(),
            ord_prc: order.price_string(),
        }
    }
}
