//! Live subscription control port.

use crate::domain::InstrumentCode;

/// Registers and releases live depth+trade subscriptions.
///
/// Calls are non-blocking hand-offs; delivery of the resulting data is the
/// feed's concern.
pub trait SubscriptionControl: Send + Sync {
    /// Start delivering depth and trade events for `code`.
    fn subscribe(&self, code: &InstrumentCode);

    /// Stop delivering events for `code`.
    fn unsubscribe(&self, code: &InstrumentCode);
}
