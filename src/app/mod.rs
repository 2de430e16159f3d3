//! Application layer - configuration, orchestration, and execution.

pub mod config;
mod execution;
mod orchestrator;

pub use config::{AccountConfig, Config, LoggingConfig, WatchConfig};
pub use orchestrator::{App, Collaborators};
