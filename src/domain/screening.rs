//! Top-turnover screening rows and daily bars from reference queries.

use rust_decimal::Decimal;

use super::id::InstrumentCode;
use super::money::{Amount, Price};

/// One currency unit of 억 (10^8), the scale turnover is reported in.
const EOK: i64 = 100_000_000;

/// One row of a ranked top-turnover screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningEntry {
    pub code: InstrumentCode,
    pub name: String,
    /// Session turnover in currency units.
    pub turnover: Amount,
    pub price: Price,
    /// Daily percentage change, e.g. `12.3` for +12.3%.
    pub change_pct: Decimal,
}

impl ScreeningEntry {
    /// Turnover rescaled to 억 units, rounded to two places. Display only.
    #[must_use]
    pub fn turnover_eok(&self) -> Decimal {
        (Decimal::from(self.turnover) / Decimal::from(EOK)).round_dp(2)
    }
}

/// The daily bar fields the engine needs from a historical query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBar {
    pub code: InstrumentCode,
    pub high: Decimal,
}
