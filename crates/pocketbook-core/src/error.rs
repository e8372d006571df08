use std::path::PathBuf;

use pocketbook_domain::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage file `{}` is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },
    #[error("Invalid position {position}: expected a number between 1 and {len}")]
    InvalidPosition { position: usize, len: usize },
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Serialization error: {0}")]
    Serde(String),
}
