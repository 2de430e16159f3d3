//! Sell-wall detection on depth snapshots.

use rust_decimal::Decimal;

use crate::domain::{Amount, DepthSnapshot, WatchEntry};

/// A qualifying wall found in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallMatch {
    /// Zero-based ask level the wall sits on.
    pub level: usize,
    pub entry: WatchEntry,
}

/// Find the first ask level resting at the daily high with at least
/// `min_amount` of value.
///
/// Levels are scanned best-first and the scan stops at the first match, so a
/// deeper qualifying level never wins over a shallower one. Without a daily
/// high nothing matches.
#[must_use]
pub fn detect_wall(
    snapshot: &DepthSnapshot,
    daily_high: Option<Decimal>,
    min_amount: Amount,
) -> Option<WallMatch> {
    let high = daily_high?;

    snapshot
        .asks()
        .iter()
        .enumerate()
        .find(|(_, level)| level.amount() >= min_amount && Decimal::from(level.price()) == high)
        .map(|(index, level)| WallMatch {
            level: index,
            entry: WatchEntry::new(level.price(), level.volume()),
        })
}
