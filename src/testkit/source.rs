//! In-memory reference data sources.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{DailyBar, InstrumentCode, ScreeningEntry};
use crate::error::{Error, Result};
use crate::port::{HistoricalDataSource, ScreeningSource};

/// Fixed daily highs and screen rows.
#[derive(Debug, Clone, Default)]
pub struct StaticReference {
    highs: HashMap<InstrumentCode, Decimal>,
    screen: Vec<ScreeningEntry>,
}

impl StaticReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high(mut self, code: &str, high: Decimal) -> Self {
        self.highs.insert(InstrumentCode::new(code), high);
        self
    }

    pub fn with_screen(mut self, screen: Vec<ScreeningEntry>) -> Self {
        self.screen = screen;
        self
    }
}

#[async_trait]
impl HistoricalDataSource for StaticReference {
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
impl ScreeningSource for StaticReference {
    async fn top_turnover(&self, limit: usize) -> Result<Vec<ScreeningEntry>> {
        Ok(self.screen.iter().take(limit).cloned().collect())
    }
}
