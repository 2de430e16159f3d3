//! Brokerage account configuration.

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `account.number`.
pub const ACCOUNT_ENV: &str = "WALLBREAK_ACCOUNT";

/// Account used for order submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Account number orders are placed under.
    #[serde(default)]
    pub number: Option<String>,
}
