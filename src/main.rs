use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use blockfall::constants::INPUT_POLL_MS;
use blockfall::game::{Command, CommandOutcome, Game};

mod config;
mod input;
mod ui;

use config::{Args, GameConfig};
use input::{handle_input, GravityClock, InputAction};
use ui::ui;

fn main() -> Result<()> {
    let config = GameConfig::from(Args::parse());
    init_logging(config.log_file.as_deref())?;

    let mut game = match config.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    // Setup terminal
    terminal::enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let result = run(&mut terminal, &mut game, &config);

    // Cleanup, even when the loop failed
    terminal::disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("leaving alternate screen")?;
    terminal.show_cursor().context("restoring cursor")?;

    info!("exiting with score {}", game.score());
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

/// Serializes key commands and gravity ticks into the game until quit.
fn run<B: Backend>(terminal: &mut Terminal<B>, game: &mut Game, config: &GameConfig) -> Result<()> {
    let mut clock = GravityClock::new(config.tick, Instant::now());

    loop {
        let snapshot = game.snapshot();
        terminal.draw(|f| ui(f, &snapshot)).context("drawing frame")?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS)).context("polling input")? {
            if let Event::Key(key) = event::read().context("reading input")? {
                match handle_input(key) {
                    Some(InputAction::Quit) => break,
                    Some(InputAction::Command(command)) => dispatch(game, &mut clock, command),
                    None => {}
                }
            }
        }

        if clock.due(Instant::now()) {
            dispatch(game, &mut clock, Command::Tick);
        }
    }

    Ok(())
}

fn dispatch(game: &mut Game, clock: &mut GravityClock, command: Command) {
    // A fresh game gets a full interval before its first tick
    if game.apply(command) == CommandOutcome::Restarted {
        clock.reset(Instant::now());
    }
}
