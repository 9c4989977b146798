//! Error types for format operations
//!
//! Translation itself never fails. These errors come from the layers around it: looking up
//! a format, validating its options, and writing output.

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not accept the requested operation or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// An option value could not be interpreted
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        FormatError::Io(err.to_string())
    }
}
