//! Implementations of ports (hexagonal adapters).

pub mod paper;
pub mod replay;
