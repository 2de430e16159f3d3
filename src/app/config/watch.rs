//! Startup watchlist configuration.

use serde::{Deserialize, Serialize};

use crate::domain::InstrumentCode;

/// Codes to put under surveillance at startup, before screening.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub codes: Vec<InstrumentCode>,
}
