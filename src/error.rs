//! Error types for Enamel.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Enamel operations.
pub type Result<T> = std::result::Result<T, EnamelError>;

/// Errors that can occur in Enamel.
#[derive(Debug, Error)]
pub enum EnamelError {
    /// A run option or animation constant is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to render or write the animation file.
    #[error("Export to {path} failed: {message}")]
    Export {
        /// Output file.
        path: PathBuf,
        /// Backend message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnamelError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an Export error.
    pub fn export(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Export {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_names_the_file() {
        let err = EnamelError::export("out/tooth.gif", "disk full");
        assert_eq!(err.to_string(), "Export to out/tooth.gif failed: disk full");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EnamelError = io.into();
        assert!(matches!(err, EnamelError::Io(_)));
    }
}
