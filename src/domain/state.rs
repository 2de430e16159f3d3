//! Per-instrument surveillance state.
//!
//! [`InstrumentStore`] is the single owner of every per-code map the engine
//! needs: the seeded daily high, the tracked sell wall ([`WatchEntry`]), and
//! the buy-print metadata ([`OrderCondition`]). Keeping them in one struct
//! lets the store enforce the cross-map invariants:
//!
//! - at most one watch entry per code;
//! - an order condition only exists while a watch entry exists;
//! - a daily high is set once and never overwritten.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::id::InstrumentCode;
use super::money::{notional, Amount, Price, Volume};

/// A sell wall being tracked at the daily high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchEntry {
    price: Price,
    volume: Volume,
    amount: Amount,
}

impl WatchEntry {
    #[must_use]
    pub fn new(price: Price, volume: Volume) -> Self {
        Self {
            price,
            volume,
            amount: notional(price, volume),
        }
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }
}

/// Metadata captured when a large buy print hits a tracked wall.
///
/// Never consulted by the breakout trigger; it only records what the wall
/// looked like when buying pressure showed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderCondition {
    high_price: Price,
    sell_wall: Amount,
    buy_volume: Volume,
}

impl OrderCondition {
    #[must_use]
    pub const fn new(high_price: Price, sell_wall: Amount, buy_volume: Volume) -> Self {
        Self {
            high_price,
            sell_wall,
            buy_volume,
        }
    }

    /// Snapshot the wall in `watch` together with the triggering print volume.
    #[must_use]
    pub const fn from_watch(watch: &WatchEntry, buy_volume: Volume) -> Self {
        Self::new(watch.price, watch.amount, buy_volume)
    }

    #[must_use]
    pub const fn high_price(&self) -> Price {
        self.high_price
    }

    #[must_use]
    pub const fn sell_wall(&self) -> Amount {
        self.sell_wall
    }

    #[must_use]
    pub const fn buy_volume(&self) -> Volume {
        self.buy_volume
    }
}

/// Where a code sits in its surveillance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No wall tracked.
    Idle,
    /// A wall is tracked.
    Watching,
    /// A wall is tracked and a large buy print has been seen.
    ConditionMet,
}

/// All state held for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentState {
    daily_high: Option<Decimal>,
    watch: Option<WatchEntry>,
    condition: Option<OrderCondition>,
}

impl InstrumentState {
    #[must_use]
    pub const fn daily_high(&self) -> Option<Decimal> {
        self.daily_high
    }

    #[must_use]
    pub const fn watch(&self) -> Option<&WatchEntry> {
        self.watch.as_ref()
    }

    #[must_use]
    pub const fn condition(&self) -> Option<&OrderCondition> {
        self.condition.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (&self.watch, &self.condition) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::Watching,
            (Some(_), Some(_)) => Phase::ConditionMet,
        }
    }
}

/// Store of [`InstrumentState`] keyed by instrument code.
#[derive(Debug, Default)]
pub struct InstrumentStore {
    states: HashMap<InstrumentCode, InstrumentState>,
}

impl InstrumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, code: &InstrumentCode) -> Option<&InstrumentState> {
        self.states.get(code)
    }

    fn entry(&mut self, code: &InstrumentCode) -> &mut InstrumentState {
        self.states.entry(code.clone()).or_default()
    }

    /// Seed the daily high for `code`.
    ///
    /// Returns `false` and keeps the existing value if one was already set.
    pub fn set_daily_high(&mut self, code: &InstrumentCode, high: Decimal) -> bool {
        let state = self.entry(code);
        if state.daily_high.is_some() {
            return false;
        }
        state.daily_high = Some(high);
        true
    }

    #[must_use]
    pub fn daily_high(&self, code: &InstrumentCode) -> Option<Decimal> {
        self.get(code).and_then(InstrumentState::daily_high)
    }

    #[must_use]
    pub fn watch(&self, code: &InstrumentCode) -> Option<&WatchEntry> {
        self.get(code).and_then(InstrumentState::watch)
    }

    #[must_use]
    pub fn condition(&self, code: &InstrumentCode) -> Option<&OrderCondition> {
        self.get(code).and_then(InstrumentState::condition)
    }

    /// Create or overwrite the watch entry for `code`, returning the previous one.
    pub fn set_watch(&mut self, code: &InstrumentCode, watch: WatchEntry) -> Option<WatchEntry> {
        self.entry(code).watch.replace(watch)
    }

    /// Create or overwrite the order condition for `code`.
    ///
    /// Refused (returns `false`) when no watch entry exists.
    pub fn record_condition(&mut self, code: &InstrumentCode, condition: OrderCondition) -> bool {
        match self.states.get_mut(code) {
            Some(state) if state.watch.is_some() => {
                state.condition = Some(condition);
                true
            }
            _ => false,
        }
    }

    /// End the surveillance cycle for `code`: remove its watch entry and
    /// order condition together. The daily high is kept.
    ///
    /// Returns the removed watch entry and condition, if there was a watch.
    pub fn clear_cycle(
        &mut self,
        code: &InstrumentCode,
    ) -> Option<(WatchEntry, Option<OrderCondition>)> {
        let state = self.states.get_mut(code)?;
        let condition = state.condition.take();
        state.watch.take().map(|watch| (watch, condition))
    }

    /// Number of codes currently tracking a wall.
    #[must_use]
    pub fn watching_count(&self) -> usize {
        self.states.values().filter(|s| s.watch.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code() -> InstrumentCode {
        InstrumentCode::new("005930")
    }

    #[test]
    fn watch_entry_computes_amount() {
        let watch = WatchEntry::new(70_000, 3_000);
        assert_eq!(watch.amount(), 210_000_000);
    }

    #[test]
    fn daily_high_is_set_once() {
        let mut store = InstrumentStore::new();

        assert!(store.set_daily_high(&code(), dec!(70000)));
        assert!(!store.set_daily_high(&code(), dec!(71000)));
        assert_eq!(store.daily_high(&code()), Some(dec!(70000)));
    }

    #[test]
    fn missing_code_has_no_daily_high() {
        let store = InstrumentStore::new();
        assert_eq!(store.daily_high(&code()), None);
    }

    #[test]
    fn set_watch_overwrites_existing_entry() {
        let mut store = InstrumentStore::new();

        assert!(store.set_watch(&code(), WatchEntry::new(70_000, 3_000)).is_none());
        let previous = store.set_watch(&code(), WatchEntry::new(70_000, 4_000));

        assert_eq!(previous.map(|w| w.volume()), Some(3_000));
        assert_eq!(store.watch(&code()).map(|w| w.volume()), Some(4_000));
        assert_eq!(store.watching_count(), 1);
    }

    #[test]
    fn condition_requires_watch() {
        let mut store = InstrumentStore::new();
        let condition = OrderCondition::new(70_000, 210_000_000, 500);

        assert!(!store.record_condition(&code(), condition));
        assert!(store.condition(&code()).is_none());

        store.set_watch(&code(), WatchEntry::new(70_000, 3_000));
        assert!(store.record_condition(&code(), condition));
        assert_eq!(store.condition(&code()), Some(&condition));
    }

    #[test]
    fn phase_follows_state() {
        let mut store = InstrumentStore::new();
        store.set_daily_high(&code(), dec!(70000));
        assert_eq!(store.get(&code()).unwrap().phase(), Phase::Idle);

        let watch = WatchEntry::new(70_000, 3_000);
        store.set_watch(&code(), watch);
        assert_eq!(store.get(&code()).unwrap().phase(), Phase::Watching);

        store.record_condition(&code(), OrderCondition::from_watch(&watch, 500));
        assert_eq!(store.get(&code()).unwrap().phase(), Phase::ConditionMet);
    }

    #[test]
    fn clear_cycle_removes_watch_and_condition_but_keeps_high() {
        let mut store = InstrumentStore::new();
        store.set_daily_high(&code(), dec!(70000));
        let watch = WatchEntry::new(70_000, 3_000);
        store.set_watch(&code(), watch);
        store.record_condition(&code(), OrderCondition::from_watch(&watch, 500));

        let (removed, condition) = store.clear_cycle(&code()).unwrap();

        assert_eq!(removed, watch);
        assert_eq!(condition.map(|c| c.buy_volume()), Some(500));
        assert!(store.watch(&code()).is_none());
        assert!(store.condition(&code()).is_none());
        assert_eq!(store.daily_high(&code()), Some(dec!(70000)));
        assert!(store.clear_cycle(&code()).is_none());
    }
}
