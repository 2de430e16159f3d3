//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to defaults. The account number can be supplied through the
//! `WALLBREAK_ACCOUNT` environment variable instead of the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::{BreakoutConfig, ScreeningConfig, MAX_SCREENING_LIMIT};
use crate::error::{ConfigError, Result};

mod account;
mod logging;
mod watch;

pub use account::{AccountConfig, ACCOUNT_ENV};
pub use logging::LoggingConfig;
pub use watch::WatchConfig;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Account name used when none is configured.
const PAPER_ACCOUNT: &str = "paper";

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Wall, print, and order thresholds.
    #[serde(default)]
    pub strategy: BreakoutConfig,
    #[serde(default)]
    pub screening: ScreeningConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub account: AccountConfig,
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config = Self::parse(&content)?;
        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given, else `config.toml` if present, else defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load(default_path);
        }

        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Parse and validate TOML without consulting the environment.
    #[allow(clippy::result_large_err)]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    fn apply_env(&mut self) {
        if let Ok(number) = std::env::var(ACCOUNT_ENV) {
            if !number.trim().is_empty() {
                self.account.number = Some(number.trim().to_string());
            }
        }
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.strategy.min_wall_amount <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "strategy.min_wall_amount",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.strategy.min_trade_amount <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "strategy.min_trade_amount",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.strategy.order_quantity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "strategy.order_quantity",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.screening.limit == 0 || self.screening.limit > MAX_SCREENING_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "screening.limit",
                reason: format!("must be between 1 and {MAX_SCREENING_LIMIT}"),
            }
            .into());
        }
        if let Some(number) = &self.account.number {
            if number.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "account.number",
                }
                .into());
            }
        }
        Ok(())
    }

    /// Account number for order submission, `"paper"` when unset.
    #[must_use]
    pub fn account_number(&self) -> &str {
        self.account.number.as_deref().unwrap_or(PAPER_ACCOUNT)
    }

    /// Render the effective configuration as TOML.
    #[allow(clippy::result_large_err)]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::Serialize)?)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
