use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{GRID_SIZE, TICK_INTERVAL_MS};
use grid_snake::error::AppResult;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, poll_input};
use grid_snake::logging::{default_log_path, init_logging_or_warn};
use grid_snake::scheduler::TickScheduler;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::info;
use simplelog::LevelFilter;

/// Upper bound on how long one loop iteration waits for input, so the
/// screen keeps redrawing after resizes while the game is idle.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path. Defaults to grid-snake.log in the system temp directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug or trace.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_logging_or_warn(&log_path, cli.log_level);
    info!(
        "starting grid-snake {} (seed {:?}, grid {}x{}, tick {TICK_INTERVAL_MS} ms)",
        env!("CARGO_PKG_VERSION"),
        cli.seed,
        GRID_SIZE.width,
        GRID_SIZE.height
    );

    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID_SIZE, seed),
        None => GameState::new(GRID_SIZE),
    };

    let result = run(state);
    info!("shutting down");
    result
}

fn run(mut state: GameState) -> AppResult<()> {
    let mut session = TerminalSession::enter()?;
    let mut scheduler =
        TickScheduler::new(Duration::from_millis(TICK_INTERVAL_MS), Instant::now());

    loop {
        session.draw(&state)?;

        let timeout = scheduler.time_until_next(Instant::now()).min(MAX_INPUT_WAIT);
        if let Some(game_input) = poll_input(timeout)? {
            if matches!(game_input, GameInput::Quit) {
                info!("quit requested, final high score {}", state.high_score);
                break;
            }

            state.apply_input(game_input);
        }

        if scheduler.poll(Instant::now(), state.phase) {
            state.tick();
        }
    }

    Ok(())
}
