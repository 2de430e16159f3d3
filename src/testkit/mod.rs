//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for depth snapshots, trade ticks, screen rows, bars.
//! - [`recording`] - Collaborators that record what the engine asked of them.
//! - [`source`] - In-memory historical and screening sources.
//! - [`stream`] - Scripted [`MarketDataFeed`](crate::port::MarketDataFeed).

pub mod domain;
pub mod recording;
pub mod source;
pub mod stream;
