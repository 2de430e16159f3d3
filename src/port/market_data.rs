//! Market data port.

use async_trait::async_trait;

use crate::domain::{DepthSnapshot, InstrumentCode, TradeTick};
use crate::error::EventError;

/// Decoded events received from a market data feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketEvent {
    /// Sell-side depth snapshot.
    Depth(DepthSnapshot),
    /// Trade print.
    Trade(TradeTick),
}

impl MarketEvent {
    /// The instrument this event is for.
    #[must_use]
    pub const fn code(&self) -> &InstrumentCode {
        match self {
            Self::Depth(snapshot) => snapshot.code(),
            Self::Trade(tick) => tick.code(),
        }
    }
}

/// Serial stream of market events for subscribed instruments.
///
/// Events for one code arrive in source order. A record that cannot be
/// decoded is yielded as an [`EventError`] so the caller can drop it without
/// ending the stream.
#[async_trait]
pub trait MarketDataFeed: Send {
    /// Next event, or `None` once the feed is exhausted.
    async fn next_event(&mut self) -> Option<Result<MarketEvent, EventError>>;

    /// Get the feed name for logging/debugging.
    fn feed_name(&self) -> &'static str;
}
