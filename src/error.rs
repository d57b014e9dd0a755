use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal front end.
///
/// The game core itself has no error paths: collisions are state
/// transitions and unknown input is ignored.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type AppResult<T> = Result<T, AppError>;
