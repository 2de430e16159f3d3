//! Order book depth snapshots.
//!
//! Only the sell side matters for wall detection, so a [`DepthSnapshot`]
//! carries up to [`MAX_DEPTH_LEVELS`] ask levels ordered from best (index 0)
//! to tenth.
//!
//! # Examples
//!
//! ```
//! use wallbreak::domain::{DepthLevel, DepthSnapshot, InstrumentCode};
//!
//! let snapshot = DepthSnapshot::new(
//!     InstrumentCode::new("005930"),
//!     vec![DepthLevel::new(70_000, 3_000), DepthLevel::new(70_100, 120)],
//! );
//!
//! assert_eq!(snapshot.asks()[0].amount(), 210_000_000);
//! ```

use super::id::InstrumentCode;
use super::money::{notional, normalize_price, Amount, Price, Volume};

/// Number of ask levels a depth feed reports.
pub const MAX_DEPTH_LEVELS: usize = 10;

/// A single resting sell level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLevel {
    price: Price,
    volume: Volume,
}

impl DepthLevel {
    /// Creates a level, normalizing the price to its magnitude.
    #[must_use]
    pub fn new(price: i64, volume: Volume) -> Self {
        Self {
            price: normalize_price(price),
            volume,
        }
    }

    /// Returns the price at this level.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the resting quantity at this level.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Resting value, `price × volume`.
    #[must_use]
    pub fn amount(&self) -> Amount {
        notional(self.price, self.volume)
    }
}

/// Sell-side depth for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthSnapshot {
    code: InstrumentCode,
    asks: Vec<DepthLevel>,
}

impl DepthSnapshot {
    /// Creates a snapshot. Levels beyond [`MAX_DEPTH_LEVELS`] are discarded.
    #[must_use]
    pub fn new(code: InstrumentCode, mut asks: Vec<DepthLevel>) -> Self {
        asks.truncate(MAX_DEPTH_LEVELS);
        Self { code, asks }
    }

    #[must_use]
    pub const fn code(&self) -> &InstrumentCode {
        &self.code
    }

    /// Ask levels, best first.
    #[must_use]
    pub fn asks(&self) -> &[DepthLevel] {
        &self.asks
    }
}
