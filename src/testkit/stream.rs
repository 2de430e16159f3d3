//! Scripted [`MarketDataFeed`] for testing.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::EventError;
use crate::port::{MarketDataFeed, MarketEvent};

/// A feed that yields a fixed queue of decoded events and decode failures,
/// then ends.
#[derive(Default)]
pub struct ScriptedFeed {
    events: VecDeque<Result<MarketEvent, EventError>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, events: Vec<MarketEvent>) -> Self {
        self.events.extend(events.into_iter().map(Ok));
        self
    }

    pub fn push(mut self, event: MarketEvent) -> Self {
        self.events.push_back(Ok(event));
        self
    }

    pub fn push_error(mut self, error: EventError) -> Self {
        self.events.push_back(Err(error));
        self
    }
}

#[async_trait]
impl MarketDataFeed for ScriptedFeed {
    async fn next_event(&mut self) -> Option<Result<MarketEvent, EventError>> {
        self.events.pop_front()
    }

    fn feed_name(&self) -> &'static str {
        "scripted"
    }
}
