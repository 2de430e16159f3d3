//! Exchange-agnostic domain types.

mod book;
mod id;
mod money;
mod order;
mod screening;
mod state;
mod trade;

pub use book::{DepthLevel, DepthSnapshot, MAX_DEPTH_LEVELS};
pub use id::{InstrumentCode, OrderId};
pub use money::{normalize_price, notional, Amount, Price, Volume};
pub use order::{OrderIntent, OrderSide, OrderType};
pub use screening::{DailyBar, ScreeningEntry};
pub use state::{InstrumentState, InstrumentStore, OrderCondition, Phase, WatchEntry};
pub use trade::TradeTick;
