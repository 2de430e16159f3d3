//! Set of instruments under active surveillance.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::InstrumentCode;
use crate::port::SubscriptionControl;

/// Instruments under surveillance. Membership drives live subscriptions.
pub struct Watchlist {
    codes: HashSet<InstrumentCode>,
    subscriptions: Arc<dyn SubscriptionControl>,
}

impl Watchlist {
    pub fn new(subscriptions: Arc<dyn SubscriptionControl>) -> Self {
        Self {
            codes: HashSet::new(),
            subscriptions,
        }
    }

    /// Add `code`, subscribing to its live data on first insertion.
    ///
    /// Returns `false` if it was already present.
    pub fn add(&mut self, code: &InstrumentCode) -> bool {
        if !self.codes.insert(code.clone()) {
            return false;
        }
        self.subscriptions.subscribe(code);
        info!(code = %code, "Added to watchlist");
        true
    }

    /// Remove `code` and release its subscription.
    ///
    /// An absent code is logged and otherwise ignored; returns `false`.
    pub fn remove(&mut self, code: &InstrumentCode) -> bool {
        if !self.codes.remove(code) {
            warn!(code = %code, "Not on watchlist");
            return false;
        }
        self.subscriptions.unsubscribe(code);
        info!(code = %code, "Removed from watchlist");
        true
    }

    /// Snapshot of current membership, in no particular order.
    #[must_use]
    pub fn list(&self) -> Vec<InstrumentCode> {
        self.codes.iter().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, code: &InstrumentCode) -> bool {
        self.codes.contains(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
