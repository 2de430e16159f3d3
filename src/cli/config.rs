//! Handler for the `config` command group.

use crate::app::Config;
use crate::cli::command::ConfigPathArg;
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    println!("Configuration valid");
    println!("  watch codes: {}", config.watch.codes.len());
    let screening = if config.screening.enabled {
        "enabled"
    } else {
        "disabled"
    };
    println!("  screening:   {screening}");
    println!("  account:     {}", config.account_number());
    Ok(())
}
