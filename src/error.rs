//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers input validation, predictor spawn failures, and I/O around the output tree.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line input failed validation. The message is user-facing as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to start predictor {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Error::Validation(message.into())
    }

    /// Whether this failure happened before any process was launched.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
