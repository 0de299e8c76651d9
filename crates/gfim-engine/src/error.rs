//! Engine error types.

use thiserror::Error;

use gfim_storage::StorageError;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error type.
///
/// Per-row failures never surface here; they are logged and counted by the
/// builders. These errors describe a whole section of a run (a table query,
/// the curve lookup, a silver-layer write) or a fatal precondition.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The store cannot serve any request; the run does not start.
    #[error("store unavailable: {backend}")]
    StoreUnavailable {
        /// Backend name as reported by the store.
        backend: &'static str,
    },

    /// A store call for one section of the run failed.
    #[error("storage error in {section}: {source}")]
    Storage {
        /// The run section the call belonged to.
        section: &'static str,
        /// The underlying storage error.
        #[source]
        source: StorageError,
    },

    /// Engine configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Creates a section-scoped storage error.
    #[must_use]
    pub fn storage(section: &'static str, source: StorageError) -> Self {
        Self::Storage { section, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_names_section() {
        let err = EngineError::storage(
            "treasury_bills",
            StorageError::Database("connection lost".to_string()),
        );
        let text = err.to_string();
        assert!(text.contains("treasury_bills"));
    }
}
