use std::io;

use pocketbook_config::ConfigError;
use pocketbook_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for the binaries and shells.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
