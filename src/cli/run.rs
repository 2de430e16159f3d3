//! Handler for the `run` command.

use tokio::signal;
use tracing::{info, warn};

use crate::app::{App, Config};
use crate::cli::command::RunArgs;
use crate::domain::InstrumentCode;
use crate::error::Result;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    apply_overrides(&mut config, args);
    config.validate()?;
    config.init_logging();

    info!(
        replay = %args.replay.display(),
        account = config.account_number(),
        "wallbreak starting"
    );

    tokio::select! {
        result = App::run_replay(&config, &args.replay) => {
            let snapshot = result?;
            println!(
                "Session complete: {} walls, {} breakouts, {} orders submitted, {} failed",
                snapshot.walls_detected,
                snapshot.breakouts,
                snapshot.orders_submitted,
                snapshot.orders_failed,
            );
        }
        _ = signal::ctrl_c() => {
            warn!("Shutdown signal received, orders not yet submitted may be discarded");
        }
    }

    info!("wallbreak stopped");
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    for raw in &args.watch {
        let code = InstrumentCode::new(raw.trim());
        if !config.watch.codes.contains(&code) {
            config.watch.codes.push(code);
        }
    }
    if args.no_screening {
        config.screening.enabled = false;
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> RunArgs {
        RunArgs {
            config: None,
            replay: PathBuf::from("session.jsonl"),
            watch: vec!["005930".into(), " 005930 ".into(), "000660".into()],
            no_screening: true,
            log_level: Some("debug".into()),
            json_logs: false,
        }
    }

    #[test]
    fn overrides_merge_watch_codes_without_duplicates() {
        let mut config = Config::default();
        config.watch.codes.push(InstrumentCode::new("000660"));

        apply_overrides(&mut config, &args());

        assert_eq!(
            config.watch.codes,
            vec![InstrumentCode::new("000660"), InstrumentCode::new("005930")]
        );
        assert!(!config.screening.enabled);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }
}
