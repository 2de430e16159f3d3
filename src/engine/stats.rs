//! Session counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared between the event loop and the execution task.
#[derive(Debug, Default)]
pub struct SessionStats {
    depth_events: AtomicU64,
    trade_events: AtomicU64,
    walls_detected: AtomicU64,
    conditions_recorded: AtomicU64,
    breakouts: AtomicU64,
    orders_submitted: AtomicU64,
    orders_failed: AtomicU64,
    events_dropped: AtomicU64,
}

/// Point-in-time copy of [`SessionStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub depth_events: u64,
    pub trade_events: u64,
    pub walls_detected: u64,
    pub conditions_recorded: u64,
    pub breakouts: u64,
    pub orders_submitted: u64,
    pub orders_failed: u64,
    pub events_dropped: u64,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_depth_event(&self) {
        self.depth_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_trade_event(&self) {
        self.trade_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_wall(&self) {
        self.walls_detected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_condition(&self) {
        self.conditions_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_breakout(&self) {
        self.breakouts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_order_submitted(&self) {
        self.orders_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_order_failed(&self) {
        self.orders_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped_event(&self) {
        self.events_dropped.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            depth_events: self.depth_events.load(Ordering::Relaxed),
            trade_events: self.trade_events.load(Ordering::Relaxed),
            walls_detected: self.walls_detected.load(Ordering::Relaxed),
            conditions_recorded: self.conditions_recorded.load(Ordering::Relaxed),
            breakouts: self.breakouts.load(Ordering::Relaxed),
            orders_submitted: self.orders_submitted.load(Ordering::Relaxed),
            orders_failed: self.orders_failed.load(Ordering::Relaxed),
            events_dropped: self.events_dropped.load(Ordering::Relaxed),
        }
    }
}
