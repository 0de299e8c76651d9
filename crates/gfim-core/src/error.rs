//! Error types for the GFIM core crate.
//!
//! This module defines the error types shared across the engine,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A record failed domain validation.
    #[error("Invalid record for {isin}: {reason}")]
    InvalidRecord {
        /// ISIN of the offending record.
        isin: String,
        /// Description of what's invalid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(isin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            isin: isin.into(),
            reason: reason.into(),
        }
    }
}
