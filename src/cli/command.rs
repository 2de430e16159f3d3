//! Command-line interface definitions.
//!
//! Defines the CLI structure for the wallbreak application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sell-wall breakout detection and execution CLI
#[derive(Parser, Debug)]
#[command(name = "wallbreak")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the wallbreak CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run breakout detection over a recorded session
    Run(RunArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `wallbreak run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON-lines session recording to replay
    #[arg(long)]
    pub replay: PathBuf,

    /// Additional codes to watch, repeatable
    #[arg(short, long = "watch", value_name = "CODE")]
    pub watch: Vec<String>,

    /// Skip the top-turnover screen at startup
    #[arg(long)]
    pub no_screening: bool,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Subcommands for `wallbreak config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional configuration path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
