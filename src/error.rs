//! Custom error types for ledgerboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledgerboard operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger store could not be reached or read
    #[error("Ledger store unavailable: {0}")]
    SourceUnavailable(String),

    /// A new transaction was rejected before any write was attempted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Appending to the ledger store failed after validation passed
    #[error("Write failed: {0}")]
    WriteFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the store itself could not be reached
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::SourceUnavailable(err.to_string())
    }
}

/// Result type alias for ledgerboard operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::SourceUnavailable("connection refused".into());
        assert_eq!(
            err.to_string(),
            "Ledger store unavailable: connection refused"
        );
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_validation_error() {
        let err = LedgerError::Validation("amount must be positive".into());
        assert!(err.is_validation());
        assert!(!err.is_source_unavailable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
