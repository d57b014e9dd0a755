use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::GameState;
use crate::renderer;

type SnakeTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Full-screen board for one process run.
///
/// Raw mode and the alternate screen are held for as long as the value
/// lives; dropping it hands the terminal back to the shell.
pub struct TerminalSession {
    terminal: SnakeTerminal,
}

impl TerminalSession {
    /// Switches the terminal into game mode.
    ///
    /// Any partially applied mode is rolled back before the error is
    /// returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        match terminal {
            Ok(terminal) => {
                debug!("entered game screen");
                Ok(Self { terminal })
            }
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one frame from a read-only view of the game.
    pub fn draw(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, state))
            .map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match restore_terminal() {
            Ok(()) => debug!("left game screen"),
            Err(error) => warn!("could not restore terminal: {error}"),
        }
    }
}

/// Leaves raw mode and the alternate screen. Idempotent.
pub fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Chains a hook that puts the terminal back before the default panic
/// report is printed, so the message is readable.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!("panic: {panic_info}");
        default_hook(panic_info);
    }));
}
