use crate::error::AppError;
use crate::model::requests::OrderRequest;
use serde::{Deserialize, Serialize};

fn default_market() -> bool {
    true
}

/// Body of `POST /api/orders/stock/buy` and `/sell`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBody {
    /// Six digit symbol code
    pub code: String,
    /// Number of shares
    pub qty: i64,
    /// Market order when `true` (the default), limit order otherwise
    #[serde(default = "default_market")]
    pub market: bool,
    /// Limit price, ignored for market orders
    #[serde(default)]
    pub price: Option<i64>,
}

impl OrderBody {
    /// Converts the dashboard's body into a validated [`OrderRequest`]
    pub fn into_request(self, idempotency_key: Option<String>) -> Result<OrderRequest, AppError> {
        let quantity = u64::try_from(self.qty)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                AppError::InvalidInput(format!("quantity must be greater than zero, got {}", self.qty))
            })?;

        let order = if self.market {
            OrderRequest::market(self.code, quantity)
        } else {
            let price = self
                .price
                .and_then(|p| u64::try_from(p).ok())
                .unwrap_or(0);
            OrderRequest::limit(self.code, quantity, price)
        };

        let order = order.with_idempotency_key(idempotency_key);
        order.validate()?;
        Ok(order)
    }
}
