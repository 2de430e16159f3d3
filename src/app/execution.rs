//! Order execution task.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::domain::OrderIntent;
use crate::engine::SessionStats;
use crate::port::OrderExecutor;

/// Drain order intents and submit each one to the broker.
///
/// Runs until every sender is dropped. Each intent is submitted exactly once;
/// a failed submission is logged and counted, never retried.
pub(crate) async fn run_execution(
    mut orders: mpsc::UnboundedReceiver<OrderIntent>,
    executor: Arc<dyn OrderExecutor>,
    stats: Arc<SessionStats>,
) {
    while let Some(intent) = orders.recv().await {
        match executor.submit(&intent).await {
            Ok(order_id) => {
                stats.record_order_submitted();
                info!(
                    broker = executor.broker_name(),
                    code = %intent.code,
                    quantity = intent.quantity,
                    order_id = %order_id,
                    "Order accepted"
                );
            }
            Err(e) => {
                stats.record_order_failed();
                error!(
                    broker = executor.broker_name(),
                    code = %intent.code,
                    quantity = intent.quantity,
                    error = %e,
                    "Order submission failed"
                );
            }
        }
    }
}
