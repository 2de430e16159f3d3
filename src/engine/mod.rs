//! Breakout detection engine.
//!
//! The [`Engine`] owns every piece of per-instrument state and is driven one
//! event at a time through `&mut self`, so state transitions for a code never
//! interleave. Per code the cycle is:
//!
//! ```text
//! Idle ──depth: wall at daily high──▶ Watching ──large buy print──▶ ConditionMet
//!   ▲                                   │                               │
//!   └────────── trade above wall: one market buy, state cleared ◀───────┘
//! ```
//!
//! `ConditionMet` only adds metadata; the breakout trigger is the wall price
//! alone.

mod config;
mod depth;
mod dispatch;
mod stats;
mod trade;
mod watchlist;

pub use config::{BreakoutConfig, ScreeningConfig, MAX_SCREENING_LIMIT};
pub use depth::{detect_wall, WallMatch};
pub use dispatch::OrderDispatcher;
pub use stats::{SessionStats, StatsSnapshot};
pub use trade::{evaluate_trade, TradeSignal};
pub use watchlist::Watchlist;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    DailyBar, DepthSnapshot, InstrumentCode, InstrumentStore, OrderCondition, OrderIntent,
    ScreeningEntry, TradeTick, WatchEntry,
};
use crate::port::MarketEvent;

/// Result of feeding one trade print to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeOutcome {
    /// No wall tracked for the code.
    Ignored,
    /// Wall still standing. `condition` is set if this print recorded one.
    Held { condition: Option<OrderCondition> },
    /// Print traded through the wall; the cycle for the code is over.
    Breakout {
        watch: WatchEntry,
        /// The intent handed to execution, `None` if execution had shut down.
        order: Option<OrderIntent>,
        /// Condition discarded with the wall, including one recorded by this
        /// same print.
        condition: Option<OrderCondition>,
    },
}

/// Per-instrument breakout state machine.
pub struct Engine {
    breakout: BreakoutConfig,
    screening: ScreeningConfig,
    store: InstrumentStore,
    watchlist: Watchlist,
    dispatcher: OrderDispatcher,
    stats: Arc<SessionStats>,
}

impl Engine {
    pub fn new(
        breakout: BreakoutConfig,
        screening: ScreeningConfig,
        watchlist: Watchlist,
        dispatcher: OrderDispatcher,
    ) -> Self {
        Self {
            breakout,
            screening,
            store: InstrumentStore::new(),
            watchlist,
            dispatcher,
            stats: Arc::new(SessionStats::new()),
        }
    }

    /// Share counters with another component instead of starting fresh.
    #[must_use]
    pub fn with_stats(mut self, stats: Arc<SessionStats>) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn stats(&self) -> Arc<SessionStats> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub const fn store(&self) -> &InstrumentStore {
        &self.store
    }

    #[must_use]
    pub const fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// Put `code` under surveillance.
    pub fn watch(&mut self, code: &InstrumentCode) -> bool {
        self.watchlist.add(code)
    }

    /// Drop `code` from surveillance, returning it to idle.
    ///
    /// Any tracked wall and condition are discarded; the daily high is kept
    /// in case the code is watched again.
    pub fn unwatch(&mut self, code: &InstrumentCode) -> bool {
        if !self.watchlist.remove(code) {
            return false;
        }
        if let Some((watch, _)) = self.store.clear_cycle(code) {
            debug!(code = %code, price = watch.price(), "Discarded tracked wall");
        }
        true
    }

    /// Seed the daily high from a historical bar. Set once per code.
    pub fn seed_daily_high(&mut self, bar: &DailyBar) -> bool {
        if !self.store.set_daily_high(&bar.code, bar.high) {
            warn!(code = %bar.code, high = %bar.high, "Daily high already seeded, ignoring");
            return false;
        }
        info!(code = %bar.code, high = %bar.high, "Daily high seeded");
        true
    }

    /// Route a decoded market event.
    pub fn handle(&mut self, event: &MarketEvent) {
        match event {
            MarketEvent::Depth(snapshot) => {
                self.on_depth(snapshot);
            }
            MarketEvent::Trade(tick) => {
                self.on_trade(tick);
            }
        }
    }

    /// Look for a sell wall at the daily high.
    ///
    /// A match creates or overwrites the code's watch entry. No match leaves
    /// the existing entry alone.
    pub fn on_depth(&mut self, snapshot: &DepthSnapshot) -> Option<WallMatch> {
        self.stats.record_depth_event();
        let code = snapshot.code();

        if !self.watchlist.contains(code) {
            debug!(code = %code, "Depth for unwatched code, skipping");
            return None;
        }

        let daily_high = self.store.daily_high(code);
        let found = detect_wall(snapshot, daily_high, self.breakout.min_wall_amount)?;

        info!(
            code = %code,
            level = found.level + 1,
            price = found.entry.price(),
            volume = found.entry.volume(),
            amount = found.entry.amount(),
            "Sell wall at daily high"
        );
        self.store.set_watch(code, found.entry);
        self.stats.record_wall();

        Some(found)
    }

    /// Evaluate a trade print against the code's tracked wall.
    ///
    /// Runs condition recording first, then the breakout check, on the same
    /// print. A breakout dispatches exactly one market buy and clears both
    /// the watch entry and the condition.
    pub fn on_trade(&mut self, tick: &TradeTick) -> TradeOutcome {
        self.stats.record_trade_event();
        let code = tick.code();

        let Some(watch) = self.store.watch(code).copied() else {
            return TradeOutcome::Ignored;
        };

        let signal = evaluate_trade(tick, &watch, self.breakout.min_trade_amount);

        if let Some(condition) = signal.condition {
            info!(
                code = %code,
                price = tick.price(),
                volume = tick.volume(),
                amount = tick.amount(),
                "Large buy print on wall"
            );
            self.store.record_condition(code, condition);
            self.stats.record_condition();
        }

        if !signal.breakout {
            return TradeOutcome::Held {
                condition: signal.condition,
            };
        }

        info!(
            code = %code,
            price = tick.price(),
            wall_price = watch.price(),
            "Breakout detected"
        );
        self.stats.record_breakout();

        let order = self.dispatcher.submit(code, self.breakout.order_quantity);
        let condition = self.store.clear_cycle(code).and_then(|(_, c)| c);

        TradeOutcome::Breakout {
            watch,
            order,
            condition,
        }
    }

    /// Enroll screen rows whose daily move reaches the configured minimum.
    ///
    /// Only the first `limit` rows are considered. Returns the codes that were
    /// newly added to the watchlist.
    pub fn ingest_screening(&mut self, entries: &[ScreeningEntry]) -> Vec<InstrumentCode> {
        let mut added = Vec::new();

        for entry in entries.iter().take(self.screening.limit) {
            if entry.change_pct < self.screening.min_change_pct {
                continue;
            }

            info!(
                code = %entry.code,
                name = %entry.name,
                price = entry.price,
                turnover_eok = %entry.turnover_eok(),
                change_pct = %entry.change_pct,
                "Screen qualifies"
            );

            if self.watchlist.add(&entry.code) {
                added.push(entry.code.clone());
            }
        }

        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepthLevel, Phase};
    use crate::testkit::domain::{bar, depth, screening_entry, trade};
    use crate::testkit::recording::RecordingSubscriptions;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc::UnboundedReceiver;

    const CODE: &str = "005930";

    fn engine() -> (Engine, UnboundedReceiver<OrderIntent>, RecordingSubscriptions) {
        let subscriptions = RecordingSubscriptions::new();
        let (dispatcher, rx) = OrderDispatcher::channel();
        let engine = Engine::new(
            BreakoutConfig::default(),
            ScreeningConfig::default(),
            Watchlist::new(Arc::new(subscriptions.clone())),
            dispatcher,
        );
        (engine, rx, subscriptions)
    }

    fn watching_engine() -> (Engine, UnboundedReceiver<OrderIntent>) {
        let (mut engine, rx, _) = engine();
        let code = InstrumentCode::new(CODE);
        engine.watch(&code);
        engine.seed_daily_high(&bar(CODE, dec!(70000)));
        engine.on_depth(&depth(CODE, &[(70_000, 3_000)]));
        (engine, rx)
    }

    fn phase(engine: &Engine) -> Phase {
        engine
            .store()
            .get(&InstrumentCode::new(CODE))
            .map_or(Phase::Idle, |s| s.phase())
    }

    #[test]
    fn depth_creates_watch_entry() {
        let (engine, _rx) = watching_engine();

        let watch = engine.store().watch(&InstrumentCode::new(CODE)).copied();

        assert_eq!(watch, Some(WatchEntry::new(70_000, 3_000)));
        assert_eq!(watch.map(|w| w.amount()), Some(210_000_000));
        assert_eq!(phase(&engine), Phase::Watching);
    }

    #[test]
    fn depth_without_daily_high_is_no_match() {
        let (mut engine, _rx, _) = engine();
        engine.watch(&InstrumentCode::new(CODE));

        let found = engine.on_depth(&depth(CODE, &[(70_000, 3_000)]));

        assert!(found.is_none());
        assert_eq!(phase(&engine), Phase::Idle);
    }

    #[test]
    fn depth_for_unwatched_code_is_skipped() {
        let (mut engine, _rx, _) = engine();
        engine.seed_daily_high(&bar(CODE, dec!(70000)));

        assert!(engine.on_depth(&depth(CODE, &[(70_000, 3_000)])).is_none());
        assert_eq!(engine.stats().snapshot().depth_events, 1);
        assert_eq!(engine.stats().snapshot().walls_detected, 0);
    }

    #[test]
    fn non_matching_depth_keeps_existing_wall() {
        let (mut engine, _rx) = watching_engine();

        engine.on_depth(&depth(CODE, &[(70_000, 10)]));

        assert_eq!(
            engine.store().watch(&InstrumentCode::new(CODE)).copied(),
            Some(WatchEntry::new(70_000, 3_000))
        );
    }

    #[test]
    fn later_matching_depth_overwrites_wall() {
        let (mut engine, _rx) = watching_engine();

        let snapshot = DepthSnapshot::new(
            InstrumentCode::new(CODE),
            vec![DepthLevel::new(69_900, 5), DepthLevel::new(70_000, 5_000)],
        );
        let found = engine.on_depth(&snapshot).unwrap();

        assert_eq!(found.level, 1);
        assert_eq!(
            engine.store().watch(&InstrumentCode::new(CODE)).map(|w| w.volume()),
            Some(5_000)
        );
    }

    #[test]
    fn trade_without_wall_is_ignored() {
        let (mut engine, mut rx, _) = engine();
        engine.watch(&InstrumentCode::new(CODE));

        let outcome = engine.on_trade(&trade(CODE, 90_000, 10_000));

        assert_eq!(outcome, TradeOutcome::Ignored);
        assert!(engine.store().condition(&InstrumentCode::new(CODE)).is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn large_print_at_wall_records_condition() {
        let (mut engine, mut rx) = watching_engine();

        let outcome = engine.on_trade(&trade(CODE, 70_000, 500));

        let expected = OrderCondition::new(70_000, 210_000_000, 500);
        assert_eq!(
            outcome,
            TradeOutcome::Held {
                condition: Some(expected)
            }
        );
        assert_eq!(
            engine.store().condition(&InstrumentCode::new(CODE)),
            Some(&expected)
        );
        assert_eq!(phase(&engine), Phase::ConditionMet);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn small_print_at_wall_changes_nothing() {
        let (mut engine, _rx) = watching_engine();

        let outcome = engine.on_trade(&trade(CODE, 70_000, 100));

        assert_eq!(outcome, TradeOutcome::Held { condition: None });
        assert_eq!(phase(&engine), Phase::Watching);
    }

    #[test]
    fn breakout_dispatches_one_order_and_clears_state() {
        let (mut engine, mut rx) = watching_engine();
        engine.on_trade(&trade(CODE, 70_000, 500));

        let outcome = engine.on_trade(&trade(CODE, 70_100, 10));

        let TradeOutcome::Breakout {
            watch,
            order,
            condition,
        } = outcome
        else {
            panic!("expected breakout, got {outcome:?}");
        };
        assert_eq!(watch.price(), 70_000);
        assert_eq!(condition.map(|c| c.buy_volume()), Some(500));

        let sent = rx.try_recv().unwrap();
        assert_eq!(Some(&sent), order.as_ref());
        assert_eq!(sent.code.as_str(), CODE);
        assert_eq!(sent.quantity, 1);
        assert!(rx.try_recv().is_err());

        let code = InstrumentCode::new(CODE);
        assert!(engine.store().watch(&code).is_none());
        assert!(engine.store().condition(&code).is_none());
        assert_eq!(engine.store().daily_high(&code), Some(dec!(70000)));
    }

    #[test]
    fn further_prints_after_breakout_do_not_reorder() {
        let (mut engine, mut rx) = watching_engine();

        engine.on_trade(&trade(CODE, 70_100, 10));
        let second = engine.on_trade(&trade(CODE, 70_200, 10));

        assert_eq!(second, TradeOutcome::Ignored);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn condition_recorded_and_discarded_by_the_same_breakout_print() {
        let (mut engine, mut rx) = watching_engine();

        // 70_100 × 1_000 clears the trade threshold and the wall on one print.
        let outcome = engine.on_trade(&trade(CODE, 70_100, 1_000));

        match outcome {
            TradeOutcome::Breakout { condition, .. } => {
                assert_eq!(condition, Some(OrderCondition::new(70_000, 210_000_000, 1_000)));
            }
            other => panic!("expected breakout, got {other:?}"),
        }
        assert!(engine.store().condition(&InstrumentCode::new(CODE)).is_none());
        assert_eq!(engine.stats().snapshot().conditions_recorded, 1);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn breakout_with_closed_execution_still_clears_state() {
        let (mut engine, rx) = watching_engine();
        drop(rx);

        let outcome = engine.on_trade(&trade(CODE, 70_100, 10));

        assert!(matches!(outcome, TradeOutcome::Breakout { order: None, .. }));
        assert!(engine.store().watch(&InstrumentCode::new(CODE)).is_none());
    }

    #[test]
    fn unwatch_clears_cycle_but_keeps_daily_high() {
        let (mut engine, _rx) = watching_engine();
        let code = InstrumentCode::new(CODE);
        engine.on_trade(&trade(CODE, 70_000, 500));

        assert!(engine.unwatch(&code));

        assert!(engine.store().watch(&code).is_none());
        assert!(engine.store().condition(&code).is_none());
        assert_eq!(engine.store().daily_high(&code), Some(dec!(70000)));
        assert!(!engine.unwatch(&code));
    }

    #[test]
    fn daily_high_is_not_reseeded() {
        let (mut engine, _rx, _) = engine();

        assert!(engine.seed_daily_high(&bar(CODE, dec!(70000))));
        assert!(!engine.seed_daily_high(&bar(CODE, dec!(72000))));
        assert_eq!(
            engine.store().daily_high(&InstrumentCode::new(CODE)),
            Some(dec!(70000))
        );
    }

    #[test]
    fn screening_boundary_is_inclusive() {
        let (mut engine, _rx, _) = engine();

        let added = engine.ingest_screening(&[
            screening_entry("000660", dec!(10.0)),
            screening_entry("035420", dec!(9.99)),
        ]);

        assert_eq!(added, vec![InstrumentCode::new("000660")]);
        assert!(!engine.watchlist().contains(&InstrumentCode::new("035420")));
    }

    #[test]
    fn screening_adds_qualifying_code_once() {
        let (mut engine, _rx, subscriptions) = engine();

        let added = engine.ingest_screening(&[
            screening_entry("000660", dec!(12.3)),
            screening_entry("000660", dec!(12.3)),
        ]);

        assert_eq!(added, vec![InstrumentCode::new("000660")]);
        assert_eq!(engine.watchlist().len(), 1);
        assert_eq!(subscriptions.subscribed(), vec![InstrumentCode::new("000660")]);
    }

    #[test]
    fn screening_respects_row_limit() {
        let subscriptions = RecordingSubscriptions::new();
        let (dispatcher, _rx) = OrderDispatcher::channel();
        let mut engine = Engine::new(
            BreakoutConfig::default(),
            ScreeningConfig {
                limit: 1,
                ..ScreeningConfig::default()
            },
            Watchlist::new(Arc::new(subscriptions)),
            dispatcher,
        );

        let added = engine.ingest_screening(&[
            screening_entry("000660", dec!(15)),
            screening_entry("035420", dec!(20)),
        ]);

        assert_eq!(added, vec![InstrumentCode::new("000660")]);
    }
}
