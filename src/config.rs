use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use blockfall::constants::DEFAULT_TICK_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Clear full rows for 100 points each.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/Right  Move    Down  Step down    Up/Space  Rotate\n  R           Restart   Q/Esc Quit"
)]
pub struct Args {
    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_name = "MS",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Seed for the piece sequence. Random when omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tick: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        Self {
            tick: Duration::from_millis(args.tick_ms),
            seed: args.seed,
            log_file: args.log_file,
        }
    }
}
