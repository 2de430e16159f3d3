//! Detection thresholds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Amount;

/// Thresholds for wall detection, buy-print conditions, and order sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutConfig {
    /// Minimum resting value at the daily high to count as a wall.
    #[serde(default = "default_min_wall_amount")]
    pub min_wall_amount: Amount,

    /// Minimum print value to record an order condition.
    #[serde(default = "default_min_trade_amount")]
    pub min_trade_amount: Amount,

    /// Shares bought per breakout.
    #[serde(default = "default_order_quantity")]
    pub order_quantity: u32,
}

const fn default_min_wall_amount() -> Amount {
    200_000_000
}

const fn default_min_trade_amount() -> Amount {
    30_000_000
}

const fn default_order_quantity() -> u32 {
    1
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            min_wall_amount: default_min_wall_amount(),
            min_trade_amount: default_min_trade_amount(),
            order_quantity: default_order_quantity(),
        }
    }
}

/// Screening enrollment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Query the screen at startup.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Rows requested from the screen.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Minimum daily percentage change to enroll, inclusive.
    #[serde(default = "default_min_change_pct")]
    pub min_change_pct: Decimal,
}

/// Upper bound on rows a turnover screen returns.
pub const MAX_SCREENING_LIMIT: usize = 50;

const fn default_enabled() -> bool {
    true
}

const fn default_limit() -> usize {
    MAX_SCREENING_LIMIT
}

fn default_min_change_pct() -> Decimal {
    Decimal::TEN
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            limit: default_limit(),
            min_change_pct: default_min_change_pct(),
        }
    }
}
