//! Reference data ports: historical bars and screening queries.

use async_trait::async_trait;

use crate::domain::{DailyBar, InstrumentCode, ScreeningEntry};
use crate::error::Result;

/// Historical bar queries.
#[async_trait]
pub trait HistoricalDataSource: Send + Sync {
    /// Today's bar for `code`. Only the high is used.
    async fn daily_high(&self, code: &InstrumentCode) -> Result<DailyBar>;
}

/// Ranked screening queries.
#[async_trait]
pub trait ScreeningSource: Send + Sync {
    /// Up to `limit` instruments ranked by session turnover, highest first.
    async fn top_turnover(&self, limit: usize) -> Result<Vec<ScreeningEntry>>;
}
