//! Buy-print and breakout evaluation on trade ticks.

use crate::domain::{Amount, OrderCondition, TradeTick, WatchEntry};

/// What a trade print means for a tracked wall.
///
/// Both fields are evaluated independently; a single print can record a
/// condition and break out at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeSignal {
    /// Set when the print's value reaches the minimum trade amount.
    pub condition: Option<OrderCondition>,
    /// Set when the print trades strictly above the wall price.
    pub breakout: bool,
}

/// Evaluate `tick` against the wall in `watch`.
#[must_use]
pub fn evaluate_trade(tick: &TradeTick, watch: &WatchEntry, min_amount: Amount) -> TradeSignal {
    let condition =
        (tick.amount() >= min_amount).then(|| OrderCondition::from_watch(watch, tick.volume()));

    TradeSignal {
        condition,
        breakout: tick.price() > watch.price(),
    }
}
