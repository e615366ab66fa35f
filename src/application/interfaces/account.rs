use crate::error::AppError;
use crate::model::responses::{AccountSummaryReport, BalanceSnapshot, DepositSnapshot};
use async_trait::async_trait;

/// Interface for the account queries
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the cash deposit and orderable cash
    ///
    /// # Returns
    /// * `Ok(DepositSnapshot)` - normalized figures of the first candidate that answered
    /// * `Err(AppError::EndpointResolution)` - no candidate answered with HTTP 200
    async fn fetch_deposit(&self) -> Result<DepositSnapshot, AppError>;

    /// Gets the balance totals and today's realized profit
    async fn fetch_balance(&self) -> Result<BalanceSnapshot, AppError>;

    /// Gets deposit and balance together
    ///
    /// A failed query leaves its fields at zero and adds a short message to
    /// `errors`; only a missing token fails the whole call.
    async fn account_summary(&self) -> Result<AccountSummaryReport, AppError>;
}
