//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use nfl_stats::{
    cli::{Commands, NflStats},
    commands::{common::CommandContext, handle_get, manage::handle_manage},
    core::StatsConfig,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = NflStats::parse();
    setup_logging(app.verbose);

    let config = StatsConfig::from_env();
    let mut ctx = CommandContext::open(config, app.db, app.json)
        .context("failed to open the stats database")?;

    match app.command {
        Commands::Get { cmd } => handle_get(&ctx, cmd)?,
        Commands::Manage { cmd } => {
            if !handle_manage(&mut ctx, cmd)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Log to stderr so JSON on stdout stays clean. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
