//! Trade prints.

use super::id::InstrumentCode;
use super::money::{notional, normalize_price, Amount, Price, Volume};

/// A single trade print for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeTick {
    code: InstrumentCode,
    price: Price,
    volume: Volume,
}

impl TradeTick {
    /// Creates a tick, normalizing the price to its magnitude. The volume
    /// keeps its sign.
    #[must_use]
    pub fn new(code: InstrumentCode, price: i64, volume: Volume) -> Self {
        Self {
            code,
            price: normalize_price(price),
            volume,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &InstrumentCode {
        &self.code
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Traded value, `price × volume`. Negative for sell-side prints.
    #[must_use]
    pub fn amount(&self) -> Amount {
        notional(self.price, self.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_print_amount() {
        let tick = TradeTick::new(InstrumentCode::new("005930"), 70_000, 500);
        assert_eq!(tick.amount(), 35_000_000);
    }

    #[test]
    fn sell_print_has_negative_amount() {
        let tick = TradeTick::new(InstrumentCode::new("005930"), -70_000, -500);
        assert_eq!(tick.price(), 70_000);
        assert_eq!(tick.amount(), -35_000_000);
    }
}
