//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Input file could not be read or parsed.
    #[error("Cannot load {path}: {reason}")]
    InvalidInput {
        /// Path of the offending file.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] gfim_storage::StorageError),

    /// Engine error.
    #[error(transparent)]
    Engine(#[from] gfim_engine::EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
