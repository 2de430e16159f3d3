//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Each external collaborator the engine talks to is a port trait an
//! adapter implements. The engine itself only touches
//! [`SubscriptionControl`]; the rest are wired by the application layer.
//!
//! ```text
//!   MarketDataFeed ──▶ ┌──────────┐ ──▶ order channel ──▶ OrderExecutor
//!                      │  Engine  │
//! HistoricalDataSource │          │ ──▶ SubscriptionControl
//!   ScreeningSource ─▶ └──────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`MarketDataFeed`] - Depth and trade events
//! - [`HistoricalDataSource`] - Daily high seeding
//! - [`ScreeningSource`] - Ranked top-turnover screen
//! - [`SubscriptionControl`] - Subscribe/unsubscribe live data per code
//! - [`OrderExecutor`] - Order submission

mod execution;
mod market_data;
mod reference;
mod subscription;

pub use execution::OrderExecutor;
pub use market_data::{MarketDataFeed, MarketEvent};
pub use reference::{HistoricalDataSource, ScreeningSource};
pub use subscription::SubscriptionControl;
