//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;

use crate::domain::{
    DailyBar, DepthLevel, DepthSnapshot, InstrumentCode, ScreeningEntry, TradeTick,
};
use crate::port::MarketEvent;

/// Depth snapshot from `(price, volume)` ask levels, best first.
pub fn depth(code: &str, levels: &[(i64, i64)]) -> DepthSnapshot {
    DepthSnapshot::new(
        InstrumentCode::new(code),
        levels
            .iter()
            .map(|&(price, volume)| DepthLevel::new(price, volume))
            .collect(),
    )
}

pub fn trade(code: &str, price: i64, volume: i64) -> TradeTick {
    TradeTick::new(InstrumentCode::new(code), price, volume)
}

pub fn depth_event(code: &str, levels: &[(i64, i64)]) -> MarketEvent {
    MarketEvent::Depth(depth(code, levels))
}

pub fn trade_event(code: &str, price: i64, volume: i64) -> MarketEvent {
    MarketEvent::Trade(trade(code, price, volume))
}

/// Screen row with placeholder name, turnover, and price.
pub fn screening_entry(code: &str, change_pct: Decimal) -> ScreeningEntry {
    ScreeningEntry {
        code: InstrumentCode::new(code),
        name: format!("Instrument {code}"),
        turnover: 150_000_000_000,
        price: 10_000,
        change_pct,
    }
}

pub fn bar(code: &str, high: Decimal) -> DailyBar {
    DailyBar {
        code: InstrumentCode::new(code),
        high,
    }
}
