//! Command-line interface.

pub mod command;
mod config;
mod run;

pub use command::{Cli, Commands, ConfigCommand, ConfigPathArg, RunArgs};

use crate::error::Result;

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args),
    }
}
