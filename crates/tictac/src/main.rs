//! tictac - console tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictac::{Config, Console, run_replay};
use tictac_core::{BoardGame, GameState};
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter used until the config is read, when `RUST_LOG` is unset.
const BOOT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter = initialize_tracing();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    apply_config_filter(&filter, &config)?;

    match cli.into_command() {
        Command::Play => run_play(&config),
        Command::Replay { moves, json } => {
            run_replay(&moves, json, &config, std::io::stdout().lock()).map(|_| ())
        }
    }
}

/// Installs the subscriber before config loading so its events are kept.
///
/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(BOOT_LOG_FILTER)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switches to the config's `log_filter` unless `RUST_LOG` is set.
fn apply_config_filter(
    handle: &reload::Handle<EnvFilter, Registry>,
    config: &Config,
) -> Result<()> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(());
    }
    handle
        .reload(EnvFilter::new(config.log_filter()))
        .context("Failed to apply log filter from config")?;
    debug!(filter = %config.log_filter(), "Log filter from config applied");
    Ok(())
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout().lock(), config);
    let mut game = BoardGame::new();

    let state: GameState = console.run(&mut game).context("Game aborted")?;
    info!(%state, moves = game.history().len(), "Game finished");
    Ok(())
}
