//! Terminal runner (default binary).
//!
//! Reads the engine configuration from `BITRIS_*` environment variables, puts
//! the terminal into raw alternate-screen mode, and runs a session until the
//! player quits. Log records go to `BITRIS_LOG_PATH` when set, since stderr is
//! hidden behind the game screen.

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::info;

use bitris::core::{GameState, SimpleRng};
use bitris::engine::{Session, SleepScheduler};
use bitris::input::TerminalCommands;
use bitris::term::TerminalRenderer;
use bitris::types::EngineConfig;

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env().context("invalid BITRIS_* configuration")?;
    let seed = seed_from_env();
    info!("starting with {:?}, seed {}", config, seed);

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let result = run(config, seed, &mut renderer);

    // Always try to restore terminal state.
    let _ = renderer.exit();
    result
}

fn run(config: EngineConfig, seed: u32, renderer: &mut TerminalRenderer) -> Result<()> {
    let state = GameState::with_rng(config, SimpleRng::new(seed));
    let mut session = Session::new(state, TerminalCommands::new(), renderer, SleepScheduler);
    session.run()
}

fn init_logging() -> Result<()> {
    let mut builder = env_logger::Builder::new();

    match std::env::var("BITRIS_LOG_PATH") {
        Ok(path) => {
            let file = File::create(&path).with_context(|| format!("creating log file {}", path))?;
            builder
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Warn).parse_default_env();
        }
    }

    builder.init();
    Ok(())
}

/// `BITRIS_SEED` if it parses, otherwise the clock.
fn seed_from_env() -> u32 {
    std::env::var("BITRIS_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}
