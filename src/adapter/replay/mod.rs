//! Recorded-session replay.
//!
//! A replay file stands in for every live collaborator at once: its
//! `daily_high` and `screening` lines answer the reference queries, and its
//! `depth` and `trade` lines are played back in file order as the market
//! data feed. Only codes that have been subscribed are delivered, mirroring a
//! broker that pushes real-time data for registered codes only.

mod message;

pub use message::{MarketRecord, RawDailyHigh, RawDepth, RawScreening, RawTrade, ReplayRecord};

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{DailyBar, InstrumentCode, ScreeningEntry};
use crate::error::{Error, EventError, Result};
use crate::port::{
    HistoricalDataSource, MarketDataFeed, MarketEvent, ScreeningSource, SubscriptionControl,
};

/// Shared set of subscribed codes.
#[derive(Debug, Clone, Default)]
pub struct ReplaySubscriptions {
    codes: Arc<RwLock<HashSet<InstrumentCode>>>,
}

impl ReplaySubscriptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_subscribed(&self, code: &str) -> bool {
        self.codes.read().contains(&InstrumentCode::new(code))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubscriptionControl for ReplaySubscriptions {
    fn subscribe(&self, code: &InstrumentCode) {
        debug!(code = %code, "Replay subscription registered");
        self.codes.write().insert(code.clone());
    }

    fn unsubscribe(&self, code: &InstrumentCode) {
        debug!(code = %code, "Replay subscription released");
        self.codes.write().remove(code);
    }
}

/// Daily highs and screen rows read from a replay file.
#[derive(Debug, Clone, Default)]
pub struct ReplayReference {
    highs: HashMap<InstrumentCode, Decimal>,
    screen: Vec<ScreeningEntry>,
}

#[async_trait]
impl HistoricalDataSource for ReplayReference {
    async fn daily_high(&self, code: &InstrumentCode) -> Result<DailyBar> {
        self.highs
            .get(code)
            .map(|&high| DailyBar {
                code: code.clone(),
                high,
            })
            .ok_or_else(|| Error::MissingDailyHigh {
                code: code.to_string(),
            })
    }
}

#[async_trait]
impl ScreeningSource for ReplayReference {
    async fn top_turnover(&self, limit: usize) -> Result<Vec<ScreeningEntry>> {
        Ok(self.screen.iter().take(limit).cloned().collect())
    }
}

/// Market data feed playing back depth and trade lines.
pub struct ReplayFeed {
    pending: VecDeque<std::result::Result<MarketRecord, EventError>>,
    subscriptions: ReplaySubscriptions,
}

impl ReplayFeed {
    /// Lines not yet played back, including ones that will be filtered out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[async_trait]
impl MarketDataFeed for ReplayFeed {
    async fn next_event(&mut self) -> Option<std::result::Result<MarketEvent, EventError>> {
        while let Some(next) = self.pending.pop_front() {
            match next {
                Err(error) => return Some(Err(error)),
                Ok(record) if self.subscriptions.is_subscribed(record.code()) => {
                    return Some(record.decode());
                }
                Ok(_) => {}
            }
        }
        None
    }

    fn feed_name(&self) -> &'static str {
        "replay"
    }
}

/// A parsed replay file.
pub struct ReplaySession {
    pub feed: ReplayFeed,
    pub reference: ReplayReference,
    pub subscriptions: ReplaySubscriptions,
}

impl ReplaySession {
    /// Read and parse a replay file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse replay content.
    ///
    /// Never fails as a whole. A line that is not a valid record is queued as
    /// a decode error at its position in the feed. Reference lines with bad
    /// fields are logged and skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let subscriptions = ReplaySubscriptions::new();
        let mut reference = ReplayReference::default();
        let mut pending = VecDeque::new();

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let record = match serde_json::from_str::<ReplayRecord>(line) {
                Ok(record) => record,
                Err(source) => {
                    pending.push_back(Err(EventError::Decode {
                        line: line_no,
                        source,
                    }));
                    continue;
                }
            };

            match record {
                ReplayRecord::DailyHigh(raw) => match raw.decode() {
                    Ok(bar) => {
                        reference.highs.insert(bar.code, bar.high);
                    }
                    Err(error) => warn!(line = line_no, error = %error, "Skipping daily high"),
                },
                ReplayRecord::Screening(raw) => match raw.decode() {
                    Ok(entry) => reference.screen.push(entry),
                    Err(error) => warn!(line = line_no, error = %error, "Skipping screen row"),
                },
                ReplayRecord::Depth(raw) => pending.push_back(Ok(MarketRecord::Depth(raw))),
                ReplayRecord::Trade(raw) => pending.push_back(Ok(MarketRecord::Trade(raw))),
            }
        }

        Self {
            feed: ReplayFeed {
                pending,
                subscriptions: subscriptions.clone(),
            },
            reference,
            subscriptions,
        }
    }
}
