//! Order dispatch.

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::domain::{InstrumentCode, OrderIntent};

/// Hands order intents to the execution side without waiting on it.
///
/// The receiving end of the channel belongs to whatever drives the
/// [`OrderExecutor`](crate::port::OrderExecutor). Sending never blocks.
#[derive(Debug, Clone)]
pub struct OrderDispatcher {
    orders: mpsc::UnboundedSender<OrderIntent>,
}

impl OrderDispatcher {
    pub fn new(orders: mpsc::UnboundedSender<OrderIntent>) -> Self {
        Self { orders }
    }

    /// A dispatcher together with the receiver its intents arrive on.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OrderIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Emit a market buy for `quantity` shares of `code`.
    ///
    /// Returns the intent that was handed off, or `None` if the execution
    /// side has shut down.
    pub fn submit(&self, code: &InstrumentCode, quantity: u32) -> Option<OrderIntent> {
        let order = OrderIntent::market_buy(code.clone(), quantity);

        info!(
            code = %code,
            order_id = %order.id,
            quantity,
            side = ?order.side,
            order_type = ?order.order_type,
            "Market buy submitted"
        );

        match self.orders.send(order.clone()) {
            Ok(()) => Some(order),
            Err(_) => {
                error!(code = %code, order_id = %order.id, "Execution channel closed, order dropped");
                None
            }
        }
    }
}
