use std::io;

use thiserror::Error;

/// Library-wide error type for bcdc operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The running executable has no containing directory.
    #[error("Cannot determine the executable's directory")]
    ExecutableDirUnavailable,

    /// Failed to serialize machine-readable output.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}
