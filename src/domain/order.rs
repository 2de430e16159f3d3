//! Order intents emitted by the engine.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::{InstrumentCode, OrderId};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Order pricing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
}

/// An order the engine wants placed.
///
/// Carries no account: the executor that receives it supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderIntent {
    pub id: OrderId,
    pub code: InstrumentCode,
    pub quantity: u32,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub created_at: DateTime<Utc>,
}

impl OrderIntent {
    /// A market buy for `quantity` shares of `code`.
    #[must_use]
    pub fn market_buy(code: InstrumentCode, quantity: u32) -> Self {
        Self {
            id: OrderId::generate(),
            code,
            quantity,
            side: OrderSide::Buy,
            order_type: OrderType::Market,
            created_at: Utc::now(),
        }
    }
}
