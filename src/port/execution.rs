//! Order execution port.

use async_trait::async_trait;

use crate::domain::{OrderId, OrderIntent};
use crate::error::ExecutionError;

/// Executor for submitting orders to a broker.
///
/// The executor owns the account the order is placed under.
#[async_trait]
pub trait OrderExecutor: Send + Sync {
    /// Submit an order. One attempt; no retry.
    async fn submit(&self, order: &OrderIntent) -> Result<OrderId, ExecutionError>;

    /// Get the broker name for logging/debugging.
    fn broker_name(&self) -> &'static str;
}
