//! Recording collaborators for assertions in tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{InstrumentCode, OrderId, OrderIntent};
use crate::error::ExecutionError;
use crate::port::{OrderExecutor, SubscriptionControl};

/// A subscription request seen by [`RecordingSubscriptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionChange {
    Subscribed(InstrumentCode),
    Unsubscribed(InstrumentCode),
}

/// Thread-safe subscription recorder.
#[derive(Clone, Default)]
pub struct RecordingSubscriptions {
    changes: Arc<Mutex<Vec<SubscriptionChange>>>,
}

impl RecordingSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<SubscriptionChange> {
        self.changes.lock().clone()
    }

    /// Codes subscribed, in call order.
    pub fn subscribed(&self) -> Vec<InstrumentCode> {
        self.changes
            .lock()
            .iter()
            .filter_map(|change| match change {
                SubscriptionChange::Subscribed(code) => Some(code.clone()),
                SubscriptionChange::Unsubscribed(_) => None,
            })
            .collect()
    }
}

impl SubscriptionControl for RecordingSubscriptions {
    fn subscribe(&self, code: &InstrumentCode) {
        self.changes
            .lock()
            .push(SubscriptionChange::Subscribed(code.clone()));
    }

    fn unsubscribe(&self, code: &InstrumentCode) {
        self.changes
            .lock()
            .push(SubscriptionChange::Unsubscribed(code.clone()));
    }
}

/// Executor that records every order it receives.
///
/// With [`RecordingExecutor::rejecting`] every submission fails after being
/// recorded.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    orders: Arc<Mutex<Vec<OrderIntent>>>,
    reject: bool,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn orders(&self) -> Vec<OrderIntent> {
        self.orders.lock().clone()
    }
}

#[async_trait]
impl OrderExecutor for RecordingExecutor {
    async fn submit(&self, order: &OrderIntent) -> Result<OrderId, ExecutionError> {
        self.orders.lock().push(order.clone());
        if self.reject {
            return Err(ExecutionError::Rejected("scripted rejection".into()));
        }
        Ok(order.id.clone())
    }

    fn broker_name(&self) -> &'static str {
        "recording"
    }
}
