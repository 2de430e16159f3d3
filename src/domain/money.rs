//! Price, volume, and traded-amount representation.
//!
//! Exchange prices are whole currency units, so all three are integers.
//! Volumes stay signed: trade prints report sell-side fills with a negative
//! volume, which makes their amount negative.

/// Price in whole currency units. Always non-negative once normalized.
pub type Price = i64;

/// Quantity in shares. Negative for sell-side trade prints.
pub type Volume = i64;

/// Traded or resting value, `price × volume`.
pub type Amount = i64;

/// Normalize a raw feed price. Some feeds prefix prices with a sign marking
/// the direction of the last move; only the magnitude is meaningful here.
#[must_use]
pub fn normalize_price(raw: i64) -> Price {
    raw.saturating_abs()
}

/// Compute `price × volume`, saturating at the `i64` bounds.
#[must_use]
pub fn notional(price: Price, volume: Volume) -> Amount {
    price.saturating_mul(volume)
}
