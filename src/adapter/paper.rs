//! Paper-trading executor.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::domain::{OrderId, OrderIntent};
use crate::error::ExecutionError;
use crate::port::OrderExecutor;

/// Accepts every order without contacting a broker.
pub struct PaperExecutor {
    account: String,
    submitted: Mutex<Vec<OrderIntent>>,
}

impl PaperExecutor {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            submitted: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Orders accepted so far.
    #[must_use]
    pub fn submitted(&self) -> Vec<OrderIntent> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl OrderExecutor for PaperExecutor {
    async fn submit(&self, order: &OrderIntent) -> Result<OrderId, ExecutionError> {
        if order.quantity == 0 {
            return Err(ExecutionError::Rejected("quantity must be positive".into()));
        }

        let broker_id = OrderId::new(format!("paper-{}", order.id));
        info!(
            account = %self.account,
            order_id = %order.id,
            broker_id = %broker_id,
            code = %order.code,
            quantity = order.quantity,
            side = ?order.side,
            order_type = ?order.order_type,
            "Paper order accepted"
        );
        self.submitted.lock().push(order.clone());

        Ok(broker_id)
    }

    fn broker_name(&self) -> &'static str {
        "paper"
    }
}
