use crate::error::AppError;
use crate::model::requests::{Direction, OrderRequest};
use crate::model::responses::OrderAck;
use async_trait::async_trait;

/// Interface for the cash order service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Submits a cash order
    ///
    /// The order is validated locally, then sent exactly once. The remote
    /// status, body and headers are returned as they came, whatever the status.
    ///
    /// # Arguments
    /// * `direction` - buy or sell
    /// * `order` - symbol, quantity, price and optional idempotency key
    async fn submit_order(
        &self,
        direction: Direction,
        order: &OrderRequest,
    ) -> Result<OrderAck, AppError>;

    /// Submits a cash buy
    async fn buy(&self, order: &OrderRequest) -> Result<OrderAck, AppError> {
        self.submit_order(Direction::Buy, order).await
    }

    /// Submits a cash sell
    async fn sell(&self, order: &OrderRequest) -> Result<OrderAck, AppError> {
        self.submit_order(Direction::Sell, order).await
    }
}
