use std::fs::File;
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppResult;

const LOG_FILE_NAME: &str = "grid-snake.log";

/// Default log location. Stdout is owned by the full-screen UI, so logs go
/// to a file.
#[must_use]
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Installs a file-backed global logger.
///
/// `LevelFilter::Off` skips logger setup entirely and leaves no file behind.
pub fn init_logging(path: &Path, level: LevelFilter) -> AppResult<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, File::create(path)?)?;
    Ok(())
}

/// Like [`init_logging`], but a failure only prints a warning to stderr and
/// the game runs without a logger. Returns whether a logger was installed.
pub fn init_logging_or_warn(path: &Path, level: LevelFilter) -> bool {
    match init_logging(path, level) {
        Ok(()) => level != LevelFilter::Off,
        Err(error) => {
            eprintln!(
                "Failed to set up logging at {}: {error}; continuing without a log",
                path.display()
            );
            false
        }
    }
}
