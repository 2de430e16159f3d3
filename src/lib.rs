//! Wallbreak - sell-wall breakout detection and execution.
//!
//! Watches a set of instruments for a large resting sell order sitting
//! exactly at the day's high. When a trade print goes through that price the
//! wall is considered consumed and one market buy is placed.
//!
//! # Modules
//!
//! - [`domain`] - Instrument codes, depth snapshots, trade prints, per-code state
//! - [`engine`] - Wall detection, breakout detection, watchlist, order dispatch
//! - [`port`] - Traits for market data, reference data, subscriptions, execution
//! - [`adapter`] - Replay and paper-trading implementations of the ports
//! - [`app`] - Configuration and session orchestration
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use wallbreak::engine::{BreakoutConfig, Engine, OrderDispatcher, ScreeningConfig, Watchlist};
//! use wallbreak::adapter::replay::ReplaySubscriptions;
//! use std::sync::Arc;
//!
//! let (dispatcher, _orders) = OrderDispatcher::channel();
//! let watchlist = Watchlist::new(Arc::new(ReplaySubscriptions::new()));
//! let engine = Engine::new(
//!     BreakoutConfig::default(),
//!     ScreeningConfig::default(),
//!     watchlist,
//!     dispatcher,
//! );
//! assert!(engine.watchlist().is_empty());
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
