//! App orchestration module.
//!
//! Wires the collaborators around an [`Engine`]: enroll codes, seed daily
//! highs, then drive the engine from the market data feed until it ends.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::paper::PaperExecutor;
use crate::adapter::replay::ReplaySession;
use crate::app::config::Config;
use crate::app::execution::run_execution;
use crate::engine::{Engine, OrderDispatcher, SessionStats, StatsSnapshot, Watchlist};
use crate::error::Result;
use crate::port::{
    HistoricalDataSource, MarketDataFeed, OrderExecutor, ScreeningSource, SubscriptionControl,
};

/// External collaborators one session runs against.
pub struct Collaborators {
    pub feed: Box<dyn MarketDataFeed>,
    pub history: Arc<dyn HistoricalDataSource>,
    pub screening: Arc<dyn ScreeningSource>,
    pub subscriptions: Arc<dyn SubscriptionControl>,
    pub executor: Arc<dyn OrderExecutor>,
}

/// Main application struct.
pub struct App;

impl App {
    /// Run one session until the feed is exhausted.
    ///
    /// Returns the session counters once every dispatched order has been
    /// submitted.
    pub async fn run(config: &Config, collaborators: Collaborators) -> Result<StatsSnapshot> {
        let Collaborators {
            mut feed,
            history,
            screening,
            subscriptions,
            executor,
        } = collaborators;

        let stats = Arc::new(SessionStats::new());
        let (dispatcher, orders) = OrderDispatcher::channel();
        let execution = tokio::spawn(run_execution(orders, executor, Arc::clone(&stats)));

        let mut engine = Engine::new(
            config.strategy.clone(),
            config.screening.clone(),
            Watchlist::new(subscriptions),
            dispatcher,
        )
        .with_stats(Arc::clone(&stats));

        for code in &config.watch.codes {
            engine.watch(code);
        }

        if config.screening.enabled {
            match screening.top_turnover(config.screening.limit).await {
                Ok(entries) => {
                    let added = engine.ingest_screening(&entries);
                    info!(
                        screened = entries.len(),
                        added = added.len(),
                        "Screening complete"
                    );
                }
                Err(e) => warn!(error = %e, "Screening query failed, continuing without it"),
            }
        }

        for code in engine.watchlist().list() {
            match history.daily_high(&code).await {
                Ok(bar) => {
                    engine.seed_daily_high(&bar);
                }
                Err(e) => warn!(code = %code, error = %e, "Daily high unavailable, walls cannot match"),
            }
        }

        if engine.watchlist().is_empty() {
            warn!("Watchlist is empty, no market data will be processed");
        } else {
            info!(
                codes = ?engine.watchlist().list().iter().map(ToString::to_string).collect::<Vec<_>>(),
                "Watchlist ready"
            );
        }

        info!(feed = feed.feed_name(), "Processing market data");
        while let Some(next) = feed.next_event().await {
            match next {
                Ok(event) => engine.handle(&event),
                Err(e) => {
                    stats.record_dropped_event();
                    warn!(error = %e, "Dropping malformed event");
                }
            }
        }
        info!(
            feed = feed.feed_name(),
            walls_tracked = engine.store().watching_count(),
            "Market data feed ended"
        );

        // Closing the order channel lets execution finish the queue and exit.
        drop(engine);
        if let Err(e) = execution.await {
            warn!(error = %e, "Execution task ended abnormally");
        }

        let snapshot = stats.snapshot();
        info!(
            depth_events = snapshot.depth_events,
            trade_events = snapshot.trade_events,
            walls = snapshot.walls_detected,
            conditions = snapshot.conditions_recorded,
            breakouts = snapshot.breakouts,
            orders_submitted = snapshot.orders_submitted,
            orders_failed = snapshot.orders_failed,
            dropped = snapshot.events_dropped,
            "Session summary"
        );

        Ok(snapshot)
    }

    /// Run a recorded session against the paper executor.
    pub async fn run_replay(config: &Config, replay: &Path) -> Result<StatsSnapshot> {
        let session = ReplaySession::load(replay)?;
        info!(
            path = %replay.display(),
            events = session.feed.remaining(),
            "Replay loaded"
        );

        let reference = Arc::new(session.reference);
        let executor = Arc::new(PaperExecutor::new(config.account_number()));

        let collaborators = Collaborators {
            feed: Box::new(session.feed),
            history: reference.clone(),
            screening: reference,
            subscriptions: Arc::new(session.subscriptions),
            executor,
        };

        Self::run(config, collaborators).await
    }
}
